use std::{error::Error, fmt::Display};

/// This type gets used to be our catch all error.
/// We implement conversions for all Library errors to ease error management.
#[derive(Debug)]
pub enum GridError {
    /// The supplied grid or obstacles violate the input constraints.
    InvalidInput(String),
    /// Event bookkeeping went wrong. This is always a bug, never a problem with the input.
    InternalInvariantViolation(String),
    /// Anticipated errors, may be rethrown with an additional error message
    Rethrow(String, Box<dyn Error>),
    /// All other library Errors get converted to this error.
    Other(Box<dyn Error>),
}

/// This type is our goto Result, as it allows us to convert between many different errors.
pub type GridResult<O> = Result<O, GridError>;

impl Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::InvalidInput(str) => {
                "invalid input: ".fmt(f)?;
                str.fmt(f)
            }
            GridError::InternalInvariantViolation(str) => {
                "internal invariant violated: ".fmt(f)?;
                str.fmt(f)
            }
            GridError::Rethrow(str, err) => {
                str.fmt(f)?;
                " with: ".fmt(f)?;
                err.fmt(f)?;
                Ok(())
            }
            GridError::Other(err) => err.fmt(f),
        }
    }
}
impl Error for GridError {}

impl GridError {
    /// Allows to annotate a GridError to better detect the origin of errors.
    /// # Usage
    /// ```
    /// # use common::{GridError, GridResult};
    /// # fn fallible_function() -> GridResult<()> {
    /// # Err(GridError::InvalidInput("".into()))
    /// # }
    /// # fn container_function() -> GridResult<()> {
    /// fallible_function().map_err(GridError::rethrow_with("function failed"))?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn rethrow_with(str: &'static str) -> impl Fn(GridError) -> GridError {
        move |err| GridError::Rethrow(str.to_string(), Box::new(err))
    }

    /// Returns true if this error, or any error it wraps, is an [GridError::InvalidInput].
    pub fn is_invalid_input(&self) -> bool {
        match self {
            GridError::InvalidInput(_) => true,
            GridError::Rethrow(_, inner) => inner
                .downcast_ref::<GridError>()
                .map_or(false, GridError::is_invalid_input),
            _ => false,
        }
    }
}

macro_rules! implement_from {
    ($type:ty) => {
        impl From<$type> for GridError {
            fn from(other: $type) -> Self {
                GridError::Other(Box::from(other))
            }
        }
    };
}
implement_from!(std::io::Error);
implement_from!(std::num::ParseIntError);
implement_from!(flexi_logger::FlexiLoggerError);
