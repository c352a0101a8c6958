//! # 문자열 유틸리티
//!
//! 필드 검증에서 사용하는 문자열 검사 함수들입니다.
//! "비어 있음"(empty)은 `length(min = 1)` 규칙이 담당하고, 여기서는 "공백뿐임"(blank)만 판정합니다.

/// 문자열이 공백이 아닌 문자를 하나 이상 포함하는지 확인합니다
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}
