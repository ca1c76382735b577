/// The authentication state of the user, passed explicitly to whatever
/// needs to know whether the user has logged in.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Session {
    logged_in: bool,
}

impl Session {
    /// Create a new `Session` which is not logged in.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new `Session` which is already logged in.
    pub fn logged_in() -> Self {
        Self { logged_in: true }
    }

    pub fn login(&mut self) {
        self.logged_in = true;
    }

    pub fn logout(&mut self) {
        self.logged_in = false;
    }

    /// Return true if the user has logged in.
    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }
}
