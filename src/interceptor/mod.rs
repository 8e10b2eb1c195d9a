mod logging;

pub use logging::logging_interceptor;
