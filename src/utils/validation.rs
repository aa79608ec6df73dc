use crate::utils::error::{EtlError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_distinct_paths(input_path: &str, output_path: &str) -> Result<()> {
    if input_path == output_path {
        return Err(EtlError::InvalidConfigValueError {
            field: "output_path".to_string(),
            value: output_path.to_string(),
            reason: "Output path would overwrite the input file".to_string(),
        });
    }

    Ok(())
}
