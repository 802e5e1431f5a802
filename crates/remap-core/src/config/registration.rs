//! Link-time discovery of profiles.
//!
//! A crate registers a configure function under a name with
//! [`register_profile!`](crate::register_profile); the configuration builder
//! can then pull profiles in by name or all at once.

use super::Profile;
use crate::errors::ConfigError;

/// Signature of a function that fills in a profile.
pub type ConfigureFn = fn(&mut Profile) -> Result<(), ConfigError>;

/// A named profile known to the process.
pub struct ProfileRegistration {
    pub name: &'static str,
    pub configure: ConfigureFn,
}

inventory::collect!(ProfileRegistration);

impl ProfileRegistration {
    /// Builds a fresh profile from this registration.
    pub fn build(&self) -> Result<Profile, ConfigError> {
        let mut profile = Profile::new(self.name);
        (self.configure)(&mut profile)?;
        Ok(profile)
    }
}

/// Every registered profile, ordered by name.
pub fn registered_profiles() -> Vec<&'static ProfileRegistration> {
    let mut registrations = Vec::new();
    for registration in inventory::iter::<ProfileRegistration> {
        registrations.push(registration);
    }
    registrations.sort_by_key(|r| r.name);
    registrations
}

/// Finds a registered profile by name.
pub fn find_registration(name: &str) -> Option<&'static ProfileRegistration> {
    for registration in inventory::iter::<ProfileRegistration> {
        if registration.name == name {
            return Some(registration);
        }
    }
    None
}

/// Registers a profile-configuring function under a name.
///
/// ```ignore
/// fn books(profile: &mut Profile) -> Result<(), ConfigError> {
///     profile.create_map::<Book, BookDto>();
///     Ok(())
/// }
/// remap_core::register_profile!("books", books);
/// ```
#[macro_export]
macro_rules! register_profile {
    ($name:expr, $configure:path $(,)?) => {
        $crate::inventory::submit! {
            $crate::config::ProfileRegistration {
                name: $name,
                configure: $configure,
            }
        }
    };
}
