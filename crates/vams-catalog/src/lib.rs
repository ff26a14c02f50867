//! # vams-catalog: Vendor Catalog
//!
//! The read and write paths around stored vendors.
//!
//! - **Listing** (`listing.rs`): flattens vendors into one row per agreement,
//!   filters rows by keyword and search scope, and paginates with the list
//!   screen's page sizes.
//!
//! - **Store** (`store.rs`): the [`VendorStore`] persistence boundary and an
//!   in-memory implementation that also serves as the NPWP registry.
//!
//! - **Service** (`service.rs`): [`VendorService::save`] validates an
//!   [`EditSession`](vams_state::EditSession) with the mandatory-field
//!   policy and writes only a clean record.
//!
//! - **Fixtures** (`fixtures.rs`): demonstration vendors and registered NPWP
//!   numbers used by the CLI and tests.
//!
//! ## Crate Policy
//!
//! - Listing functions are pure and take "today" as a parameter.
//! - Store and service writes are logged with `tracing`.

pub mod fixtures;
pub mod listing;
pub mod service;
pub mod store;

pub use listing::{
    filter, flatten, paginate, AgreementRow, ListingError, Page, PageRequest, SearchScope,
    DEFAULT_PAGE_SIZE, PAGE_SIZES,
};
pub use service::{SaveError, VendorService};
pub use store::{InMemoryVendorStore, StoreError, VendorStore};
