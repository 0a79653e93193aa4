//! Парсер и сериализатор текста с разделителями.
//!
//! Чисто синтаксический слой: никакого знания об именах колонок и типах.
//! Поле в кавычках может содержать разделители и переводы строк литерально;
//! удвоенная кавычка внутри кавычек — одна литеральная кавычка.

/// Разбирает текст в последовательность строк-записей.
///
/// Правила:
/// - `\n` и `\r\n` завершают запись одинаково; одиночный `\r` отбрасывается
///   и никогда не попадает в поле;
/// - незавершённая непустая последняя запись всё равно отдаётся;
/// - запись из одних пустых полей (в т.ч. артефакт финального перевода
///   строки) в результат не попадает.
pub fn parse_delimited(text: &str, delimiter: char) -> Vec<Vec<String>> {
    // UTF-8 BOM от внешних выгрузок
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                '\r' => {}
                _ => field.push(c),
            }
        } else {
            match c {
                '"' => in_quotes = true,
                '\r' => {}
                '\n' => {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                c if c == delimiter => row.push(std::mem::take(&mut field)),
                _ => field.push(c),
            }
        }
    }

    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows.into_iter().filter(|r| !is_blank_row(r)).collect()
}

/// Запись, у которой все поля пустые после trim.
pub fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|f| f.trim().is_empty())
}

/// Экранирует поле, если оно содержит разделитель, кавычки или перевод
/// строки: оборачивает в кавычки и удваивает внутренние кавычки.
pub fn escape_cell(cell: &str, delimiter: char) -> String {
    if cell.contains(delimiter) || cell.contains('"') || cell.contains('\n') || cell.contains('\r')
    {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Сериализует одну запись (без завершающего перевода строки).
pub fn serialize_row(fields: &[String], delimiter: char) -> String {
    fields
        .iter()
        .map(|f| escape_cell(f, delimiter))
        .collect::<Vec<_>>()
        .join(&delimiter.to_string())
}
