pub mod fetch;
pub mod resource;

pub use fetch::{FetchError, FetchResponse, InMemoryFetcher, UrlFetcher};
pub use resource::{
    InMemoryResourceProvider, ResourceError, ResourceProvider, SharedResourceData,
};
