//! Domain logic - pure text and naming rules independent of the filesystem

pub mod build_config;
pub mod manifest;
pub mod store_order;
pub mod version;

pub use build_config::{rewrite_build_config, BuildConfigRewrite, BuildConfigRewriteError};
pub use manifest::{detect_indent, rewrite_manifest, ManifestRewrite, ManifestRewriteError};
pub use store_order::{StoreOrder, StoreSlot};
pub use version::ReleaseVersion;
