/// 单位前缀，按 1024 递进：K、M、G、T、P、E。
const UNIT_PREFIXES: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

/// 判断是否需要进位到下一个单位的阈值（约 1023.95 × 1024^k）。
///
/// 低于该阈值时保留一位小数不会被四舍五入成 `1024.0`，因此无需进位。
const ROLLOVER_THRESHOLD: i64 = 0x0fff_cccc_cccc_cccc;

/// 把字节数格式化为二进制单位的可读字符串（基数 1024，保留一位小数）。
///
/// - 绝对值小于 1024 时原样输出整数：`"1023 B"`
/// - 否则选择最大的单位，使缩放后的绝对值小于 1024（最大单位 E 除外）：`"1.5 KB"`、`"1.0 MB"`
/// - 负数保留符号；`i64::MIN` 按 `i64::MAX` 的量级处理，不会溢出
pub fn format_byte_size(bytes: i64) -> String {
    let abs = if bytes == i64::MIN {
        i64::MAX
    } else {
        bytes.abs()
    };
    if abs < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = abs;
    let mut unit = 0;
    let mut shift = 40;
    while shift >= 0 && abs > ROLLOVER_THRESHOLD >> shift {
        value >>= 10;
        unit += 1;
        shift -= 10;
    }

    let signed = value * bytes.signum();
    format!("{:.1} {}B", signed as f64 / 1024.0, UNIT_PREFIXES[unit])
}

/// 无符号字节数的便捷版本；超过 `i64::MAX` 的值按 `i64::MAX` 处理。
pub fn format_byte_count(bytes: u64) -> String {
    format_byte_size(i64::try_from(bytes).unwrap_or(i64::MAX))
}
