pub mod classifier_server;
pub mod log_capture;
