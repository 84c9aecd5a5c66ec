//! Filter dialog reconciliation
//!
//! The URL is the source of truth for the applied genre filter. While the
//! dialog is open the user edits a separate [`WorkingSelection`]; on confirm
//! the reconciler compares the two as sets and only rewrites `with_genres`
//! when they differ. Navigation and closing the dialog happen on every
//! confirm, including when building the new query fails.

use crate::error::FilterError;
use crate::filters::query::{AppliedSelection, QueryParams, WITH_GENRES};
use crate::filters::selection::WorkingSelection;
use crate::genre::GenreToken;
use tracing::{debug, info, warn};

/// Performs a client-side route transition.
pub trait Navigator {
    /// Navigate to `path` with `query` (no leading `?`, may be empty).
    fn navigate(&mut self, path: &str, query: &str);
}

impl<F> Navigator for F
where
    F: FnMut(&str, &str),
{
    fn navigate(&mut self, path: &str, query: &str) {
        self(path, query)
    }
}

/// Dialog lifecycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DialogPhase {
    #[default]
    Closed,
    Open,
}

/// Result of a confirm: whether `with_genres` was rewritten, and the query
/// string that was navigated to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmOutcome {
    pub changed: bool,
    pub query: String,
}

/// True when the applied and working selections differ as sets.
///
/// An absent applied filter always counts as different, even against an
/// empty working selection. `Invalid` tokens never match, so any selection
/// holding one always differs.
pub fn set_inequality(applied: Option<&AppliedSelection>, working: &WorkingSelection) -> bool {
    let Some(applied) = applied else {
        return true;
    };
    if applied.len() != working.len() {
        return true;
    }

    let mut a = applied.tokens().to_vec();
    let mut w = working.tokens().to_vec();
    a.sort_by(GenreToken::sort_cmp);
    w.sort_by(GenreToken::sort_cmp);

    a.iter().zip(w.iter()).any(|(x, y)| !x.numeric_eq(y))
}

/// State behind the genre filter dialog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterReconciler {
    phase: DialogPhase,
    query: QueryParams,
    working: WorkingSelection,
}

impl FilterReconciler {
    /// A closed dialog observing `query`.
    pub fn new(query: QueryParams) -> Self {
        let mut reconciler = Self {
            phase: DialogPhase::Closed,
            query,
            working: WorkingSelection::new(),
        };
        reconciler.resync();
        reconciler
    }

    pub fn phase(&self) -> DialogPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == DialogPhase::Open
    }

    pub fn working(&self) -> &WorkingSelection {
        &self.working
    }

    /// Notification that the page's query string changed. Replaces the
    /// applied filter and resets the working selection from it.
    pub fn observe_query(&mut self, query: QueryParams) {
        self.query = query;
        self.resync();
    }

    /// `Closed -> Open`, seeding the working selection from the applied filter.
    pub fn open(&mut self) {
        self.set_phase(DialogPhase::Open);
    }

    /// `Open -> Closed` without confirming: the working selection is discarded
    /// and nothing is navigated.
    pub fn dismiss(&mut self) {
        self.set_phase(DialogPhase::Closed);
    }

    /// Flip membership of `genre_id`. Ignored while closed. Returns whether
    /// the genre is selected afterwards.
    pub fn toggle(&mut self, genre_id: i64) -> bool {
        if !self.is_open() {
            debug!("Ignoring toggle of genre {} while dialog is closed", genre_id);
            return self.working.contains(genre_id);
        }
        self.working.toggle(genre_id)
    }

    /// Whether `clear` would do anything. Used to disable the control.
    pub fn can_clear(&self) -> bool {
        self.is_open() && !self.working.is_empty()
    }

    /// Empty the working selection. Returns false when unavailable.
    pub fn clear(&mut self) -> bool {
        if !self.can_clear() {
            return false;
        }
        self.working.clear()
    }

    /// Commit the working selection.
    ///
    /// Rewrites `with_genres` only when the working selection differs from
    /// the applied one, then navigates to `path` with the resulting query and
    /// closes the dialog. The navigation and close also run when encoding the
    /// query fails; in that case the query as last observed is used and the
    /// error is returned afterwards.
    pub fn confirm<N>(&mut self, path: &str, navigator: &mut N) -> Result<ConfirmOutcome, FilterError>
    where
        N: Navigator + ?Sized,
    {
        self.confirm_with(path, navigator, QueryParams::to_query_string)
    }

    fn confirm_with<N, E>(
        &mut self,
        path: &str,
        navigator: &mut N,
        encode: E,
    ) -> Result<ConfirmOutcome, FilterError>
    where
        N: Navigator + ?Sized,
        E: FnOnce(&QueryParams) -> Result<String, FilterError>,
    {
        let mut finish = FinishConfirm {
            reconciler: self,
            navigator,
            path,
            query: String::new(),
        };

        match finish.reconciler.query.to_query_string() {
            Ok(current) => finish.query = current,
            Err(e) => warn!("Current query could not be re-encoded: {}", e),
        }

        let reconciler = &*finish.reconciler;
        let changed = set_inequality(reconciler.query.applied_genres().as_ref(), &reconciler.working);
        let mut params = reconciler.query.clone();
        if changed {
            if reconciler.working.is_empty() {
                params.delete(WITH_GENRES);
            } else {
                params.set(WITH_GENRES, reconciler.working.to_param_value());
            }
        }

        let encoded = encode(&params)?;
        debug!("Genre filter confirmed (changed: {}): {:?}", changed, encoded);
        finish.query = encoded.clone();

        Ok(ConfirmOutcome {
            changed,
            query: encoded,
        })
    }

    fn set_phase(&mut self, phase: DialogPhase) {
        debug!("Filter dialog {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
        self.resync();
    }

    fn resync(&mut self) {
        self.working = match self.query.applied_genres() {
            Some(applied) => WorkingSelection::from_applied(&applied),
            None => WorkingSelection::new(),
        };
    }
}

/// Navigates and closes the dialog when dropped, so every exit from
/// `confirm` (success, error or panic) ends the same way. Closing goes through
/// the normal phase transition, so the working selection is reset too.
struct FinishConfirm<'a, N: Navigator + ?Sized> {
    reconciler: &'a mut FilterReconciler,
    navigator: &'a mut N,
    path: &'a str,
    query: String,
}

impl<N: Navigator + ?Sized> Drop for FinishConfirm<'_, N> {
    fn drop(&mut self) {
        info!("Navigating to {}?{}", self.path, self.query);
        self.navigator.navigate(self.path, &self.query);
        self.reconciler.set_phase(DialogPhase::Closed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingNavigator {
        visits: Vec<(String, String)>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&mut self, path: &str, query: &str) {
            self.visits.push((path.to_string(), query.to_string()));
        }
    }

    fn opened(raw_query: &str) -> FilterReconciler {
        let mut r = FilterReconciler::new(QueryParams::parse(raw_query));
        r.open();
        r
    }

    fn working_ids(r: &FilterReconciler) -> Vec<i64> {
        let mut ids: Vec<i64> = r.working().tokens().iter().filter_map(|t| t.id()).collect();
        ids.sort_unstable();
        ids
    }

    fn ids(ids: &[i64]) -> WorkingSelection {
        ids.iter().map(|&id| GenreToken::Id(id)).collect()
    }

    #[test]
    fn test_set_inequality_absent_is_always_changed() {
        assert!(set_inequality(None, &WorkingSelection::new()));
        assert!(set_inequality(None, &ids(&[1])));
    }

    #[test]
    fn test_set_inequality_ignores_order() {
        let applied = AppliedSelection::parse("3,2,1");
        assert!(!set_inequality(Some(&applied), &ids(&[1, 2, 3])));
    }

    #[test]
    fn test_set_inequality_detects_size_and_membership() {
        let applied = AppliedSelection::parse("1,2,3");
        assert!(set_inequality(Some(&applied), &ids(&[1, 2, 3, 4])));
        assert!(set_inequality(Some(&applied), &ids(&[1, 2, 4])));
        assert!(set_inequality(Some(&applied), &ids(&[1, 2])));
    }

    #[test]
    fn test_set_inequality_compares_numerically() {
        // 10 and 9 must not be ordered as strings
        let applied = AppliedSelection::parse("10,9");
        assert!(!set_inequality(Some(&applied), &ids(&[9, 10])));
    }

    #[test]
    fn test_set_inequality_invalid_never_equal() {
        let applied = AppliedSelection::parse("abc");
        let working = WorkingSelection::from_applied(&applied);
        assert!(set_inequality(Some(&applied), &working));
    }

    #[test]
    fn test_set_inequality_duplicates_in_url_differ() {
        let applied = AppliedSelection::parse("1,1");
        let working = WorkingSelection::from_applied(&applied);
        assert!(set_inequality(Some(&applied), &working));
    }

    #[test]
    fn test_open_resyncs_from_query() {
        let r = opened("with_genres=3,7,9");
        assert!(r.is_open());
        assert_eq!(working_ids(&r), vec![3, 7, 9]);
    }

    #[test]
    fn test_open_without_param_is_empty() {
        let r = opened("q=heat");
        assert!(r.working().is_empty());
    }

    #[test]
    fn test_reopen_discards_unconfirmed_changes() {
        let mut r = opened("with_genres=1");
        r.toggle(2);
        r.dismiss();
        r.open();
        assert_eq!(working_ids(&r), vec![1]);
    }

    #[test]
    fn test_dismiss_never_navigates() {
        let mut nav = RecordingNavigator::default();
        let mut r = opened("with_genres=1");
        r.toggle(2);
        r.dismiss();
        assert_eq!(r.phase(), DialogPhase::Closed);
        assert!(r.working().tokens().iter().all(|t| *t == GenreToken::Id(1)));
        assert!(nav.visits.is_empty());
        // the navigator is still usable afterwards
        r.open();
        r.confirm("/search", &mut nav).unwrap();
        assert_eq!(nav.visits.len(), 1);
    }

    #[test]
    fn test_external_query_change_resyncs_while_open() {
        let mut r = opened("with_genres=1");
        r.toggle(5);
        r.observe_query(QueryParams::parse("with_genres=28,12"));
        assert!(r.is_open());
        assert_eq!(working_ids(&r), vec![12, 28]);
    }

    #[test]
    fn test_toggle_ignored_while_closed() {
        let mut r = FilterReconciler::new(QueryParams::parse("with_genres=1"));
        assert!(!r.toggle(2));
        assert!(r.toggle(1));
        assert_eq!(working_ids(&r), vec![1]);
    }

    #[test]
    fn test_clear_disabled_when_empty() {
        let mut r = opened("");
        assert!(!r.can_clear());
        assert!(!r.clear());
        assert!(r.working().is_empty());
    }

    #[test]
    fn test_clear_empties_selection() {
        let mut r = opened("with_genres=1,2");
        assert!(r.can_clear());
        assert!(r.clear());
        assert!(r.working().is_empty());
        assert!(!r.can_clear());
    }

    #[test]
    fn test_confirm_absent_then_toggle_sets_param() {
        let mut nav = RecordingNavigator::default();
        let mut r = opened("");
        r.toggle(5);
        let outcome = r.confirm("/search", &mut nav).unwrap();
        assert!(outcome.changed);
        assert_eq!(outcome.query, "with_genres=5");
        assert_eq!(nav.visits, vec![("/search".to_string(), "with_genres=5".to_string())]);
        assert_eq!(r.phase(), DialogPhase::Closed);
    }

    #[test]
    fn test_confirm_untouched_selection_keeps_query() {
        let mut nav = RecordingNavigator::default();
        let mut r = opened("with_genres=1,2");
        let outcome = r.confirm("/search", &mut nav).unwrap();
        assert!(!outcome.changed);
        assert_eq!(outcome.query, "with_genres=1%2C2");
        assert_eq!(nav.visits.len(), 1);
        assert!(!r.is_open());
    }

    #[test]
    fn test_confirm_removing_all_deletes_param() {
        let mut nav = RecordingNavigator::default();
        let mut r = opened("q=heat&with_genres=1,2");
        r.toggle(1);
        r.toggle(2);
        let outcome = r.confirm("/search", &mut nav).unwrap();
        assert!(outcome.changed);
        assert_eq!(outcome.query, "q=heat");
        assert_eq!(nav.visits, vec![("/search".to_string(), "q=heat".to_string())]);
    }

    #[test]
    fn test_confirm_net_zero_toggle_is_unchanged() {
        let mut nav = RecordingNavigator::default();
        let mut r = opened("with_genres=4");
        r.toggle(4);
        r.toggle(4);
        let outcome = r.confirm("/search", &mut nav).unwrap();
        assert!(!outcome.changed);
        assert_eq!(outcome.query, "with_genres=4");
        assert_eq!(r.phase(), DialogPhase::Closed);
    }

    #[test]
    fn test_confirm_absent_and_empty_still_reports_changed() {
        let mut nav = RecordingNavigator::default();
        let mut r = opened("q=heat");
        let outcome = r.confirm("/search", &mut nav).unwrap();
        assert!(outcome.changed);
        assert_eq!(outcome.query, "q=heat");
        assert_eq!(nav.visits.len(), 1);
    }

    #[test]
    fn test_confirm_preserves_unrelated_params() {
        let mut nav = RecordingNavigator::default();
        let mut r = opened("q=blade+runner&with_genres=878&page=2");
        r.toggle(53);
        let outcome = r.confirm("/search", &mut nav).unwrap();
        assert_eq!(outcome.query, "q=blade+runner&with_genres=878%2C53&page=2");
    }

    #[test]
    fn test_confirm_with_invalid_token_rewrites_as_nan() {
        let mut nav = RecordingNavigator::default();
        let mut r = opened("with_genres=abc");
        let outcome = r.confirm("/search", &mut nav).unwrap();
        assert!(outcome.changed);
        assert_eq!(outcome.query, "with_genres=NaN");
    }

    #[test]
    fn test_confirm_accepts_closure_navigator() {
        let mut last = None;
        let mut r = opened("");
        r.toggle(28);
        r.confirm("/", &mut |path: &str, query: &str| {
            last = Some(format!("{}?{}", path, query));
        })
        .unwrap();
        assert_eq!(last.as_deref(), Some("/?with_genres=28"));
    }

    #[test]
    fn test_confirm_closes_with_working_reset() {
        let mut nav = RecordingNavigator::default();
        let mut r = opened("with_genres=1");
        r.toggle(2);
        r.confirm("/search", &mut nav).unwrap();
        assert!(!r.is_open());
        assert_eq!(working_ids(&r), vec![1]);
    }

    #[test]
    fn test_confirm_untouched_integral_float_is_unchanged() {
        let mut nav = RecordingNavigator::default();
        let mut r = opened("with_genres=28.0");
        assert!(r.working().contains(28));
        let outcome = r.confirm("/search", &mut nav).unwrap();
        assert!(!outcome.changed);
        assert_eq!(outcome.query, "with_genres=28.0");
    }

    #[test]
    fn test_confirm_untouched_fraction_is_unchanged() {
        let mut nav = RecordingNavigator::default();
        let mut r = opened("with_genres=1.5,1e1");
        assert!(r.working().contains(10));
        let outcome = r.confirm("/search", &mut nav).unwrap();
        assert!(!outcome.changed);
        assert_eq!(outcome.query, "with_genres=1.5%2C1e1");
    }

    #[test]
    fn test_confirm_edit_keeps_fraction_value() {
        let mut nav = RecordingNavigator::default();
        let mut r = opened("with_genres=1.5");
        r.toggle(28);
        let outcome = r.confirm("/search", &mut nav).unwrap();
        assert!(outcome.changed);
        assert_eq!(outcome.query, "with_genres=1.5%2C28");
    }

    #[test]
    fn test_confirm_encode_error_still_navigates_and_closes() {
        let mut nav = RecordingNavigator::default();
        let mut r = opened("q=heat&with_genres=1");
        r.toggle(2);
        let result = r.confirm_with("/search", &mut nav, |_| {
            Err(FilterError::Encode(
                <serde_urlencoded::ser::Error as serde::ser::Error>::custom("unsupported value"),
            ))
        });
        assert!(matches!(result, Err(FilterError::Encode(_))));
        assert_eq!(
            nav.visits,
            vec![("/search".to_string(), "q=heat&with_genres=1".to_string())]
        );
        assert!(!r.is_open());
        assert_eq!(working_ids(&r), vec![1]);
    }

    #[test]
    fn test_confirm_panic_still_navigates_and_closes() {
        let mut nav = RecordingNavigator::default();
        let mut r = opened("with_genres=1");
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            r.confirm_with("/search", &mut nav, |_| panic!("encoder failed"))
        }));
        assert!(result.is_err());
        assert_eq!(
            nav.visits,
            vec![("/search".to_string(), "with_genres=1".to_string())]
        );
        assert_eq!(r.phase(), DialogPhase::Closed);
    }
}
