//! User-facing error messages.
//!
//! Pure mapping from the error taxonomy (plus the operation that was being
//! attempted) to a display string. Anything without a dedicated mapping
//! falls through to the error's `Display` impl.

use crate::error::KeyError;
use crate::model::Operation;

pub fn format_error(op: Operation, err: &KeyError) -> String {
    match (op, err) {
        (_, KeyError::Unauthorized) => {
            format!("Error while attempting to perform {} : Not authorized", op)
        }
        (_, KeyError::Api(message)) => {
            format!("Error while attempting to perform {} : {}", op, message)
        }
        (Operation::Revoke, KeyError::KeyNotFound(_)) => {
            "Error while revoking key : key not found".to_string()
        }
        (Operation::Generate, KeyError::Validation { message, errors }) => {
            let mut out = message.clone();
            for (field, error) in errors {
                out.push_str(&format!("\n  {}: {}", field, error));
            }
            out
        }
        (_, KeyError::BadCommand(_)) => {
            "Unknown command. Command must be fetch, generate, list, or revoke".to_string()
        }
        (_, other) => other.to_string(),
    }
}
