use super::repository::SearchRepository;
use crate::api::{Advocate, AdvocateSearchFilters, ApiClient, ApiError};
use leptos::*;

/// Filters being edited are kept apart from the ones last searched with, so
/// typing does not trigger a request.
#[derive(Clone, Copy)]
pub struct SearchViewModel {
    pub filters: RwSignal<AdvocateSearchFilters>,
    pub applied: RwSignal<(u32, AdvocateSearchFilters)>,
    pub results: Resource<(u32, AdvocateSearchFilters), Result<Vec<Advocate>, ApiError>>,
}

impl SearchViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(SearchRepository::new(api));
        let filters = create_rw_signal(AdvocateSearchFilters::default());
        let applied = create_rw_signal((0u32, AdvocateSearchFilters::default()));

        let results = create_resource(
            move || applied.get(),
            move |(_, filters)| {
                let repo = repository.get_value();
                async move { repo.search(&filters).await }
            },
        );

        Self {
            filters,
            applied,
            results,
        }
    }

    pub fn search(&self) {
        let filters = self.filters.get_untracked();
        self.applied
            .update(|(generation, applied)| {
                *generation = generation.wrapping_add(1);
                *applied = filters;
            });
    }

    pub fn clear(&self) {
        self.filters.set(AdvocateSearchFilters::default());
        self.search();
    }
}

impl Default for SearchViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn bio_excerpt(bio: &str) -> String {
    const MAX: usize = 120;
    if bio.chars().count() <= MAX {
        bio.to_string()
    } else {
        format!("{}...", bio.chars().take(MAX).collect::<String>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bio_excerpt_truncates_long_text() {
        assert_eq!(bio_excerpt("Short bio"), "Short bio");
        let long = "a".repeat(150);
        let excerpt = bio_excerpt(&long);
        assert_eq!(excerpt.len(), 123);
        assert!(excerpt.ends_with("..."));
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn search_applies_current_filters_and_clear_resets_them() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            let vm = SearchViewModel::new();
            vm.filters.update(|f| f.city = "Pune".into());
            assert_eq!(vm.applied.get_untracked().1, AdvocateSearchFilters::default());

            vm.search();
            let (generation, applied) = vm.applied.get_untracked();
            assert_eq!(generation, 1);
            assert_eq!(applied.city, "Pune");

            vm.clear();
            let (generation, applied) = vm.applied.get_untracked();
            assert_eq!(generation, 2);
            assert_eq!(applied, AdvocateSearchFilters::default());
            assert_eq!(vm.filters.get_untracked(), AdvocateSearchFilters::default());
            leptos_reactive::suppress_resource_load(false);
        });
    }
}
