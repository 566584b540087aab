/// Одна колонка таблицы, полученная отдельным обходом.
///
/// Строки разных колонок сопоставляются только по позиции. Если колонка
/// короче остальных, недостающие ячейки читаются как значение по умолчанию.
#[derive(Debug, Clone)]
pub struct Column<T> {
    pub oid: &'static str,
    pub values: Vec<T>,
}

impl<T: Clone + Default> Column<T> {
    pub fn new(oid: &'static str, values: Vec<T>) -> Self {
        Self { oid, values }
    }

    /// Ячейка по позиции, либо `T::default()` за пределами колонки
    pub fn at(&self, index: usize) -> T {
        self.values.get(index).cloned().unwrap_or_default()
    }
}
