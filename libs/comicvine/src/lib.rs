mod api;
mod client;
mod error;
pub mod models;
mod issue;
mod search;
mod volume;

pub use api::ComicvineApi;
pub use client::{ApiKey, ComicvineClient};
pub use error::ComicvineError;
pub use models::{
    CreditRole, Image, Issue, IssueStub, NamedCredit, Page, PersonCredit, Publisher, Volume,
    VolumeStub, VolumeSummary,
};

pub type Result<T> = std::result::Result<T, ComicvineError>;
