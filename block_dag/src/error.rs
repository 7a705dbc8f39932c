use thiserror::Error;

#[derive(PartialEq, Debug, Error)]
pub enum Error {
    #[error("layout dimensions must be finite and positive (width: {width}, height: {height})")]
    InvalidDimensions { width: f64, height: f64 },
    #[error("lane margin must be at least 0 and less than 1 (lane_margin: {lane_margin})")]
    InvalidLaneMargin { lane_margin: f64 },
}
