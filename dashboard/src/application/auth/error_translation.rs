use crate::error::{BackendError, ConfigError};
use thiserror::Error;

/// Auth failures as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The platform refused the request. Carries the localized message when
    /// one is known, the platform's raw message otherwise.
    #[error("{0}")]
    Rejected(String),
    /// No client could be built for the platform.
    #[error("Không thể kết nối Supabase")]
    Unavailable,
    #[error("Đã có lỗi xảy ra. Vui lòng thử lại.")]
    Unexpected,
}

impl AuthError {
    /// `Unavailable` when `err` means no platform client could be built.
    /// Local failures such as an unreadable storage file are not auth errors.
    pub fn from_connect(err: &ConfigError) -> Option<Self> {
        match err {
            ConfigError::Missing(_) | ConfigError::InvalidUrl { .. } | ConfigError::HttpClient(_) => {
                Some(AuthError::Unavailable)
            }
            ConfigError::Load(_) | ConfigError::Storage(_) => None,
        }
    }

    pub fn from_backend(err: &BackendError) -> Self {
        match err {
            BackendError::Api { message, .. } => AuthError::Rejected(translate_error(message)),
            _ => AuthError::Unexpected,
        }
    }

    /// Same as [`AuthError::from_backend`] but keeps the platform's message as is.
    pub fn from_backend_raw(err: &BackendError) -> Self {
        match err {
            BackendError::Api { message, .. } => AuthError::Rejected(message.clone()),
            _ => AuthError::Unexpected,
        }
    }
}

/// Maps the platform's English auth errors to Vietnamese UI strings.
pub fn translate_error(message: &str) -> String {
    let translated = match message {
        "Invalid login credentials" => "Email hoặc mật khẩu không đúng",
        "Email not confirmed" => "Email chưa được xác nhận. Vui lòng kiểm tra hộp thư.",
        "User already registered" => "Email này đã được đăng ký",
        "Password should be at least 6 characters" => "Mật khẩu phải có ít nhất 6 ký tự",
        "Unable to validate email address: invalid format" => "Định dạng email không hợp lệ",
        "Email rate limit exceeded" => "Gửi quá nhiều yêu cầu. Vui lòng đợi vài phút.",
        "For security purposes, you can only request this once every 60 seconds" => {
            "Vui lòng đợi 60 giây trước khi thử lại"
        }
        other => other,
    };
    translated.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_messages_are_translated() {
        let table = [
            ("Invalid login credentials", "Email hoặc mật khẩu không đúng"),
            ("Email not confirmed", "Email chưa được xác nhận. Vui lòng kiểm tra hộp thư."),
            ("User already registered", "Email này đã được đăng ký"),
            ("Password should be at least 6 characters", "Mật khẩu phải có ít nhất 6 ký tự"),
            ("Unable to validate email address: invalid format", "Định dạng email không hợp lệ"),
            ("Email rate limit exceeded", "Gửi quá nhiều yêu cầu. Vui lòng đợi vài phút."),
            (
                "For security purposes, you can only request this once every 60 seconds",
                "Vui lòng đợi 60 giây trước khi thử lại",
            ),
        ];
        for (english, vietnamese) in table {
            assert_eq!(translate_error(english), vietnamese);
        }
    }

    #[test]
    fn test_unknown_messages_pass_through() {
        assert_eq!(translate_error("Signups not allowed for this instance"), "Signups not allowed for this instance");
        assert_eq!(translate_error("invalid login credentials"), "invalid login credentials");
        assert_eq!(translate_error(""), "");
    }

    #[test]
    fn test_backend_errors_map_to_auth_errors() {
        let rejected = BackendError::api(400, "Invalid login credentials");
        assert_eq!(
            AuthError::from_backend(&rejected),
            AuthError::Rejected("Email hoặc mật khẩu không đúng".to_string())
        );
        assert_eq!(
            AuthError::from_backend_raw(&rejected),
            AuthError::Rejected("Invalid login credentials".to_string())
        );
        assert_eq!(AuthError::from_backend(&BackendError::NoSession), AuthError::Unexpected);
    }

    #[test]
    fn test_only_client_failures_read_as_unavailable() {
        assert_eq!(
            AuthError::from_connect(&ConfigError::Missing("backend.url")).map(|e| e.to_string()),
            Some("Không thể kết nối Supabase".to_string())
        );
        assert_eq!(
            AuthError::from_connect(&ConfigError::HttpClient("tls backend".to_string())),
            Some(AuthError::Unavailable)
        );

        let storage = ConfigError::Storage(crate::error::StorageError::Poisoned);
        assert_eq!(AuthError::from_connect(&storage), None);
        assert_eq!(storage.to_string(), "Local storage unavailable: Storage lock poisoned");
    }
}
