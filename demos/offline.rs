// Finds the nearest of a few hard-coded points, without any network access.

use nearaddr::{find_nearest_with_distance, Candidate, Coord};

fn main() {
    let here = Coord::new(-19.9167, -43.9345);
    let candidates = vec![
        Candidate::new(Coord::new(-20.5, -44.5), "Itaguara"),
        Candidate::new(Coord::new(-19.92, -43.94), "Savassi"),
        Candidate::new(Coord::new(-22.9068, -43.1729), "Rio de Janeiro"),
    ];

    match find_nearest_with_distance(here, &candidates) {
        Some(nearest) => println!(
            "{} is {:.2} km away",
            nearest.item().payload(),
            nearest.distance_km()
        ),
        None => println!("No address found"),
    }
}
