use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompactError {
    #[error("Invalid IPv4 address: {0}")]
    InvalidIpv4(String),

    #[error("Truncated compact peer list: {0} bytes is not a multiple of 6")]
    Truncated(usize),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_ipv4_display() {
        let error = CompactError::InvalidIpv4("300.1.1.1".to_string());
        assert_eq!(format!("{}", error), "Invalid IPv4 address: 300.1.1.1");
    }

    #[test]
    fn test_truncated_display() {
        let error = CompactError::Truncated(7);
        assert_eq!(format!("{}", error), "Truncated compact peer list: 7 bytes is not a multiple of 6");
    }
}
