//! # Naming Module / 命名模块
//!
//! Pure functions that turn labels and test-file identities into
//! filesystem-safe directory names.
//!
//! 将标签和测试文件标识转换为文件系统安全目录名的纯函数。

/// Label used when the caller does not supply one (or supplies an empty one).
pub const DEFAULT_LABEL: &str = "default";

/// Sanitizes a caller-supplied label for use as a directory name.
///
/// Every maximal run of characters outside `[A-Za-z0-9_-]` is replaced by a
/// single underscore, so `"!!!bang"` becomes `"_bang"` rather than `"___bang"`.
/// A missing or empty label becomes [`DEFAULT_LABEL`].
///
/// 清理调用方提供的标签，使其可用作目录名。
/// 每一段连续的 `[A-Za-z0-9_-]` 以外的字符都被替换为单个下划线。
/// 缺失或空的标签会变为 [`DEFAULT_LABEL`]。
///
/// # Examples
/// ```
/// use test_tempdir::core::naming::sanitize_label;
///
/// assert_eq!(sanitize_label(Some("a space")), "a_space");
/// assert_eq!(sanitize_label(Some("!!!bang")), "_bang");
/// assert_eq!(sanitize_label(None), "default");
/// ```
pub fn sanitize_label(label: Option<&str>) -> String {
    let label = match label {
        Some(l) if !l.is_empty() => l,
        _ => DEFAULT_LABEL,
    };

    let mut sanitized = String::with_capacity(label.len());
    let mut in_invalid_run = false;
    for c in label.chars() {
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            sanitized.push(c);
            in_invalid_run = false;
        } else if !in_invalid_run {
            sanitized.push('_');
            in_invalid_run = true;
        }
    }
    sanitized
}

/// Derives the namespace directory name from a test file identity.
///
/// Path separators, drive colons and the extension dot are each replaced
/// one-for-one with an underscore: `t/foo.t` becomes `t_foo_t`. The mapping
/// is deterministic, so repeated runs of the same test file share a name.
///
/// 从测试文件标识推导命名空间目录名。
/// 路径分隔符、盘符冒号和扩展名点号都逐个替换为下划线。
///
/// # Examples
/// ```
/// use test_tempdir::core::naming::namespace_name;
///
/// assert_eq!(namespace_name("t/foo.t"), "t_foo_t");
/// assert_eq!(namespace_name(r"C:\tests\bar.exe"), "C__tests_bar_exe");
/// ```
pub fn namespace_name(identity: &str) -> String {
    if identity.is_empty() {
        return DEFAULT_LABEL.to_string();
    }
    identity.replace(['/', '\\', ':', '.'], "_")
}

/// Composes the directory name for the `count`-th allocation of a label.
pub fn allocation_name(sanitized_label: &str, count: u32) -> String {
    format!("{}_{}", sanitized_label, count)
}
