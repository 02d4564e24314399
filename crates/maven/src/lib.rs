//! # modkit-maven
//!
//! Maven repository support for modkit.
//!
//! Locates the previously published POM of a module, decides whether the current commit
//! needs publishing, and stamps the commit hash into the POM that gets published so the
//! next run can compare against it.

pub mod coordinates;
pub mod decision;
pub mod fetcher;
pub mod metadata;
pub mod pom;

pub use coordinates::Coordinates;
pub use decision::{check_publish, should_publish};
pub use fetcher::{HttpPomFetcher, PomFetcher};
pub use metadata::{attach_publish_metadata, attach_publish_metadata_to_file};
pub use pom::{Pom, PomProperties, parse_pom};
