pub mod a001_measurement;
pub mod a002_body_photo;
pub mod a003_body_snapshot;
