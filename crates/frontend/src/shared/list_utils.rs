/// Универсальные утилиты для таблиц со списками (сортировка по заголовкам)
use contracts::shared::filter::{SortDirection, SortSpec};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// Получить индикатор сортировки для заголовка
pub fn sort_indicator(sort: Option<&SortSpec>, field: &str) -> &'static str {
    match sort {
        Some(spec) if spec.field == field => match spec.direction {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
        },
        _ => " ⇅",
    }
}

/// Создать обработчик переключения сортировки: первый клик сортирует по
/// возрастанию, повторный меняет направление.
pub fn create_sort_toggle(
    field: &'static str,
    sort: RwSignal<Option<SortSpec>>,
) -> impl Fn(MouseEvent) + 'static {
    move |_| {
        sort.update(|current| {
            *current = match current.take() {
                Some(mut spec) if spec.field == field => {
                    spec.direction = match spec.direction {
                        SortDirection::Ascending => SortDirection::Descending,
                        SortDirection::Descending => SortDirection::Ascending,
                    };
                    Some(spec)
                }
                _ => Some(SortSpec::ascending(field)),
            };
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_reflects_current_sort() {
        assert_eq!(sort_indicator(None, "name"), " ⇅");
        let asc = SortSpec::ascending("name");
        assert_eq!(sort_indicator(Some(&asc), "name"), " ▲");
        assert_eq!(sort_indicator(Some(&asc), "other"), " ⇅");
        let desc = SortSpec::descending("name");
        assert_eq!(sort_indicator(Some(&desc), "name"), " ▼");
    }
}
