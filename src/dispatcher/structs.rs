/// The request router.
pub mod dispatcher;
