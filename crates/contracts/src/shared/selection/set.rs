/// Разделитель идентификаторов в скрытом поле формы
pub const FIELD_DELIMITER: char = ',';

/// Упорядоченный (в порядке документа) набор идентификаторов выбранных элементов.
///
/// Всегда непустой, когда получен из контроллера выбора: отсутствие выбора
/// выражается через `Option<SelectionSet>`, а в скрытом поле это пустая строка.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet(Vec<String>);

impl SelectionSet {
    pub fn new(ids: Vec<String>) -> Self {
        Self(ids)
    }

    pub fn ids(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Значение для скрытого поля формы
    pub fn encode(&self) -> String {
        self.0.join(&FIELD_DELIMITER.to_string())
    }

    /// Значение поля для `None` (ничего не выбрано)
    pub fn encode_optional(set: Option<&SelectionSet>) -> String {
        set.map(SelectionSet::encode).unwrap_or_default()
    }

    /// Разбор значения поля на стороне получателя формы.
    /// Пустые сегменты отбрасываются, поэтому пустая строка даёт пустой набор.
    pub fn decode(value: &str) -> Self {
        Self(
            value
                .split(FIELD_DELIMITER)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_keeps_order() {
        let set = SelectionSet::new(vec!["b".into(), "a".into(), "c".into()]);
        assert_eq!(set.encode(), "b,a,c");
    }

    #[test]
    fn test_single_id_has_no_delimiter() {
        let set = SelectionSet::new(vec!["A1".into()]);
        assert_eq!(set.encode(), "A1");
        assert_eq!(SelectionSet::decode("A1").ids(), ["A1".to_string()]);
    }

    #[test]
    fn test_empty_indicator() {
        assert_eq!(SelectionSet::encode_optional(None), "");
        assert!(SelectionSet::decode("").is_empty());
    }

    #[test]
    fn test_decode_skips_empty_segments() {
        let set = SelectionSet::decode("p1,,p2,");
        assert_eq!(set.ids(), ["p1".to_string(), "p2".to_string()]);
    }

    #[test]
    fn test_decode_inverts_encode() {
        let set = SelectionSet::new(vec!["37i9dQ".into(), "Daft Punk".into()]);
        assert_eq!(SelectionSet::decode(&set.encode()), set);
    }
}
