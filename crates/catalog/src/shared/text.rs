//! Нормализация свободного текста описаний перед рендером.

/// Приводит текст описания к каноничному виду:
/// - `\r\n` → `\n`;
/// - хвостовые пробелы/табы перед переводом строки убираются;
/// - три и более подряд перевода строки схлопываются до двух;
/// - текст целиком обрезается по краям.
///
/// Идемпотентна: повторная нормализация ничего не меняет.
pub fn normalize_description(text: &str) -> String {
    let unified = text.replace("\r\n", "\n");

    let mut stripped = String::with_capacity(unified.len());
    for (i, line) in unified.split('\n').enumerate() {
        if i > 0 {
            stripped.push('\n');
        }
        stripped.push_str(line.trim_end_matches([' ', '\t']));
    }

    let mut collapsed = stripped;
    while collapsed.contains("\n\n\n") {
        collapsed = collapsed.replace("\n\n\n", "\n\n");
    }

    collapsed.trim().to_string()
}
