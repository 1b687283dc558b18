//! Утилиты форматирования чисел для подписей осей и подсказок

/// Форматирует число с разделителем тысяч (пробел) и указанным количеством знаков после запятой
///
/// # Примеры
///
/// ```
/// use frontend::shared::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    // Вставляем пробелы каждые 3 цифры с конца целой части
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{sign}{grouped}.{d}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Подпись деления оси: столько знаков, сколько нужно для шага делений
///
/// ```
/// use frontend::shared::number_format::format_tick;
/// assert_eq!(format_tick(2500.0, 500.0), "2 500");
/// assert_eq!(format_tick(0.25, 0.05), "0.25");
/// ```
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step < 1.0 {
        (-step.log10() - 1e-9).ceil() as usize
    } else {
        0
    };
    // -0 после округления выводим как 0
    let value = if value.abs() < step.abs() * 1e-9 { 0.0 } else { value };
    format_number_with_decimals(value, decimals)
}

/// Значение в подсказке графика; пропуск показываем прочерком
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 => format_number_with_decimals(v, 0),
        Some(v) => format_number_with_decimals(v, 2),
        None => "—".to_string(),
    }
}
