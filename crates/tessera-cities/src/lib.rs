//! Tessera Cities
//!
//! Loading and caching of onboarded city records.
//!
//! # Architecture
//!
//! - [`TomlCitySource`] reads city records from a TOML file and implements
//!   the domain [`CitySource`](tessera_domain::traits::CitySource) trait
//! - [`CityCache`] is an explicitly owned cache of the loaded list with
//!   `get`, `set` and `invalidate`, living either for one ingestion run or
//!   for a fixed TTL
//!
//! # Examples
//!
//! ```no_run
//! use tessera_cities::{CityCache, TomlCitySource};
//! use std::time::Duration;
//!
//! # fn main() -> Result<(), tessera_cities::CityError> {
//! let source = TomlCitySource::new("cities.toml");
//! let mut cache = CityCache::with_ttl(Duration::from_secs(15 * 60));
//!
//! let cities = cache.get_or_load(&source)?;
//! println!("{} cities onboarded", cities.len());
//!
//! // After an admin edit, force the next lookup to reload.
//! cache.invalidate();
//! # Ok(())
//! # }
//! ```
//!
//! # City file format
//!
//! ```toml
//! [[cities]]
//! slug = "lisbon"
//! name = "Lisbon"
//! population = 545000
//! radius_meters = 9000
//! grid_rows = 4
//! grid_cols = 4
//!
//! [cities.overrides]
//! min_reviews = 3
//! ```

#![warn(missing_docs)]

mod cache;
mod error;
mod source;

pub use cache::{CacheLifetime, CityCache};
pub use error::CityError;
pub use source::{parse_cities, TomlCitySource};
