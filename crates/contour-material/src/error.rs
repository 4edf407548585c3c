/// Invalid text field configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextFieldError {
    InvalidMaxLines { max_lines: usize },
    InvalidMinSize { width: f32, height: f32 },
}

impl std::fmt::Display for TextFieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextFieldError::InvalidMaxLines { max_lines } => {
                write!(f, "max_lines must be at least 1, got {max_lines}")
            }
            TextFieldError::InvalidMinSize { width, height } => {
                write!(f, "minimum size must be finite and non-negative, got {width}x{height}")
            }
        }
    }
}

impl std::error::Error for TextFieldError {}
