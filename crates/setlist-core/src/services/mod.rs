pub mod catalogue_session;

pub use catalogue_session::CatalogueSession;
