#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum CollectionError {
    #[error("Index {index} out of bounds for list of length {len}.")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CollectionError {
    pub fn new_index_out_of_bounds(index: usize, len: usize) -> Self {
        CollectionError::IndexOutOfBounds { index, len }
    }
}

pub type Result<T> = std::result::Result<T, CollectionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_error_reports_position() {
        let err = CollectionError::new_index_out_of_bounds(4, 2);
        assert_eq!(
            err.to_string(),
            "Index 4 out of bounds for list of length 2."
        );
    }

    #[test]
    fn io_error_converts() {
        fn fails() -> Result<()> {
            Err::<(), _>(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "closed",
            ))?;
            Ok(())
        }
        assert!(matches!(fails(), Err(CollectionError::Io(_))));
    }
}
