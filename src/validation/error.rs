//! 검증기 구성 에러

use std::fmt;

/// 검증기 생성 실패 (잘못된 구성, 사용자 입력 문제는 아님)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// 등록되지 않은 검증기 유형
    UnknownValidatorType(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::UnknownValidatorType(name) => {
                write!(f, "Unknown validator type: {}", name)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
