use crate::coord::Coord;

/// Anything with a position which can take part in a nearest search.
pub trait Located {
    /// Return the position of this item.
    fn coord(&self) -> Coord;
}

impl Located for Coord {
    fn coord(&self) -> Coord {
        *self
    }
}

impl<T: Located> Located for &T {
    fn coord(&self) -> Coord {
        (*self).coord()
    }
}

/// A coordinate paired with an arbitrary payload. The payload is carried
/// through a search untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate<P> {
    coord: Coord,
    payload: P,
}

impl<P> Candidate<P> {
    /// Create a new `Candidate`.
    pub fn new(coord: Coord, payload: P) -> Self {
        Self { coord, payload }
    }

    /// Return a reference to the payload.
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Return the payload and consume the candidate.
    pub fn into_payload(self) -> P {
        self.payload
    }
}

impl<P> Located for Candidate<P> {
    fn coord(&self) -> Coord {
        self.coord
    }
}

/// The result of a successful nearest search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Nearest<'a, T> {
    item: &'a T,
    index: usize,
    distance_km: f64,
}

impl<'a, T> Nearest<'a, T> {
    /// Return the nearest item.
    pub fn item(&self) -> &'a T {
        self.item
    }

    /// Return the position of the nearest item in the searched slice.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Return the great-circle distance from the reference to the nearest
    /// item, in kilometres.
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }
}

/// Return the candidate nearest to `reference` by great-circle distance,
/// or `None` if `candidates` is empty. When several candidates are equally
/// near, the first one wins.
///
/// # Example
/// ```rust
/// use nearaddr::{find_nearest, Candidate, Coord};
/// let candidates = vec![
///     Candidate::new(Coord::new(-19.92, -43.94), "Savassi"),
///     Candidate::new(Coord::new(-20.5, -44.5), "Itaguara"),
/// ];
/// let nearest = find_nearest(Coord::new(-19.9167, -43.9345), &candidates);
/// assert_eq!(nearest.map(|c| *c.payload()), Some("Savassi"));
/// ```
pub fn find_nearest<T: Located>(reference: Coord, candidates: &[T]) -> Option<&T> {
    find_nearest_with_distance(reference, candidates).map(|nearest| nearest.item())
}

/// Like `find_nearest`, but also return the winning distance and the
/// winner's index.
///
/// The scan is seeded with the first candidate, so a non-empty slice always
/// produces a result even if some distances are NaN.
pub fn find_nearest_with_distance<T: Located>(
    reference: Coord,
    candidates: &[T],
) -> Option<Nearest<'_, T>> {
    let (first, rest) = candidates.split_first()?;

    let mut nearest = Nearest {
        item: first,
        index: 0,
        distance_km: reference.distance_km(&first.coord()),
    };

    for (offset, candidate) in rest.iter().enumerate() {
        let distance_km = reference.distance_km(&candidate.coord());
        if distance_km < nearest.distance_km {
            nearest = Nearest {
                item: candidate,
                index: offset + 1,
                distance_km,
            };
        }
    }

    Some(nearest)
}

#[cfg(test)]
mod test {
    use super::{find_nearest, find_nearest_with_distance, Candidate};
    use crate::coord::Coord;

    fn candidates(coords: &[(f64, f64)]) -> Vec<Candidate<usize>> {
        coords
            .iter()
            .enumerate()
            .map(|(i, &(lat, lng))| Candidate::new(Coord::new(lat, lng), i))
            .collect()
    }

    #[test]
    fn empty_list_has_no_nearest() {
        let empty: Vec<Candidate<usize>> = Vec::new();
        assert!(find_nearest(Coord::new(0.0, 0.0), &empty).is_none());
        assert!(find_nearest(Coord::new(-19.9167, -43.9345), &empty).is_none());
    }

    #[test]
    fn small_offsets_around_the_origin() {
        let cands = candidates(&[(0.0, 1.0), (0.0, 10.0), (-0.5, 0.5)]);
        let nearest = find_nearest_with_distance(Coord::new(0.0, 0.0), &cands)
            .unwrap();
        // 0.707 degrees of arc beats a full degree along the equator.
        assert_eq!(*nearest.item().payload(), 2);
        assert_eq!(nearest.index(), 2);
        assert!((nearest.distance_km() - 78.6).abs() < 0.1);
    }

    #[test]
    fn belo_horizonte() {
        let cands = candidates(&[(-19.92, -43.94), (-20.5, -44.5)]);
        let nearest = find_nearest(Coord::new(-19.9167, -43.9345), &cands)
            .unwrap();
        assert_eq!(*nearest.payload(), 0);
    }

    #[test]
    fn ties_go_to_the_first_candidate() {
        let cands = candidates(&[(0.0, 1.0), (0.0, -1.0)]);
        let nearest = find_nearest(Coord::new(0.0, 0.0), &cands).unwrap();
        assert_eq!(*nearest.payload(), 0);

        let cands = candidates(&[(0.0, -1.0), (0.0, 1.0)]);
        let nearest = find_nearest(Coord::new(0.0, 0.0), &cands).unwrap();
        assert_eq!(*nearest.payload(), 0);
    }

    #[test]
    fn duplicate_candidates_resolve_to_the_first() {
        let cands = candidates(&[(5.0, 5.0), (1.0, 1.0), (1.0, 1.0)]);
        let nearest = find_nearest(Coord::new(0.0, 0.0), &cands).unwrap();
        assert_eq!(*nearest.payload(), 1);
    }

    #[test]
    fn result_is_always_a_member_of_the_input() {
        let cands = candidates(&[
            (12.0, 80.0),
            (-33.9, 151.2),
            (51.5, -0.12),
            (40.7, -74.0),
            (-19.9, -43.9),
        ]);
        for reference in &[
            Coord::new(0.0, 0.0),
            Coord::new(-34.0, 150.0),
            Coord::new(50.0, 2.0),
            Coord::new(89.9, 179.9),
        ] {
            let nearest = find_nearest(*reference, &cands).unwrap();
            assert!(cands.iter().any(|c| std::ptr::eq(c, nearest)));
        }
    }

    #[test]
    fn nearest_is_no_farther_than_any_other_candidate() {
        let cands = candidates(&[
            (12.0, 80.0),
            (-33.9, 151.2),
            (51.5, -0.12),
            (40.7, -74.0),
        ]);
        let reference = Coord::new(45.0, -60.0);
        let nearest = find_nearest_with_distance(reference, &cands).unwrap();
        for cand in &cands {
            let d = reference.distance_km(&super::Located::coord(cand));
            assert!(nearest.distance_km() <= d);
        }
        assert_eq!(*nearest.item().payload(), 3);
    }

    #[test]
    fn reference_on_a_candidate_has_zero_distance() {
        let cands = candidates(&[(3.0, 3.0), (-19.92, -43.94)]);
        let nearest =
            find_nearest_with_distance(Coord::new(-19.92, -43.94), &cands)
                .unwrap();
        assert_eq!(nearest.distance_km(), 0.0);
        assert_eq!(nearest.index(), 1);
    }

    #[test]
    fn plain_coords_can_be_searched() {
        let coords = vec![Coord::new(10.0, 10.0), Coord::new(1.0, 1.0)];
        let nearest = find_nearest(Coord::new(0.0, 0.0), &coords).unwrap();
        assert_eq!(*nearest, Coord::new(1.0, 1.0));
    }

    #[test]
    fn nan_candidates_still_yield_a_member() {
        let cands = candidates(&[(f64::NAN, 0.0), (1.0, 1.0)]);
        let nearest = find_nearest(Coord::new(0.0, 0.0), &cands).unwrap();
        assert!(cands.iter().any(|c| std::ptr::eq(c, nearest)));
    }
}
