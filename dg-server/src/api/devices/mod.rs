pub mod confirm_device_request;
pub mod devices;
