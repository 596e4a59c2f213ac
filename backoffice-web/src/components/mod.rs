pub(crate) mod guarded_route;
pub(crate) mod loading;

pub use loading::Loading;
