//! # Navigation State
//!
//! A two-way bounded counter over the module list.
//!
//! ```text
//!   retreat ◄──  [0] ⇄ [1] ⇄ … ⇄ [N-1]  ──► advance
//!   (no-op at 0)                       (no-op at N-1)
//! ```
//!
//! Transitions take the state by value and return the next one, so they can
//! be tested without a terminal. Position is never persisted; every session
//! starts at module 0.

use crate::core::course::Module;
use crate::core::error::ConfigurationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    current_index: usize,
    module_count: usize,
}

impl NavigationState {
    /// Starts at the first module. `module_count` must be at least 1.
    pub fn new(module_count: usize) -> Result<Self, ConfigurationError> {
        if module_count == 0 {
            return Err(ConfigurationError::EmptyCourse);
        }
        Ok(Self {
            current_index: 0,
            module_count,
        })
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn module_count(&self) -> usize {
        self.module_count
    }

    /// Next module, or `self` unchanged on the last one.
    #[must_use]
    pub fn advance(self) -> Self {
        if self.is_last() {
            return self;
        }
        Self {
            current_index: self.current_index + 1,
            ..self
        }
    }

    /// Previous module, or `self` unchanged on the first one.
    #[must_use]
    pub fn retreat(self) -> Self {
        if self.is_first() {
            return self;
        }
        Self {
            current_index: self.current_index - 1,
            ..self
        }
    }

    /// `100 × (index + 1) / N`, always in `(0, 100]`.
    pub fn progress(&self) -> f64 {
        100.0 * (self.current_index + 1) as f64 / self.module_count as f64
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 == self.module_count
    }

    /// The module under the cursor.
    ///
    /// A slice of the wrong length means the course was wired up
    /// incorrectly, which is reported rather than clamped.
    pub fn current_module<'a>(&self, modules: &'a [Module]) -> Result<&'a Module, ConfigurationError> {
        if modules.len() != self.module_count {
            return Err(ConfigurationError::ModuleCountMismatch {
                expected: self.module_count,
                found: modules.len(),
            });
        }
        Ok(&modules[self.current_index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::course::Course;

    fn walk_to(count: usize, index: usize) -> NavigationState {
        let mut state = NavigationState::new(count).unwrap();
        for _ in 0..index {
            state = state.advance();
        }
        state
    }

    #[test]
    fn test_starts_at_first_module() {
        let state = NavigationState::new(3).unwrap();
        assert_eq!(state.current_index(), 0);
        assert!(state.is_first());
        assert!(!state.is_last());
    }

    #[test]
    fn test_empty_course_rejected() {
        assert!(matches!(
            NavigationState::new(0),
            Err(ConfigurationError::EmptyCourse)
        ));
    }

    #[test]
    fn test_progress_formula_and_bounds() {
        for count in 1..=12 {
            for index in 0..count {
                let state = walk_to(count, index);
                assert_eq!(state.current_index(), index);
                let expected = 100.0 * (index + 1) as f64 / count as f64;
                assert!((state.progress() - expected).abs() < 1e-9);
                assert!(state.progress() > 0.0);
                assert!(state.progress() <= 100.0);
            }
        }
    }

    #[test]
    fn test_single_module_is_both_first_and_last() {
        let state = NavigationState::new(1).unwrap();
        assert!(state.is_first());
        assert!(state.is_last());
        assert_eq!(state.progress(), 100.0);
        assert_eq!(state.advance(), state);
        assert_eq!(state.retreat(), state);
    }

    #[test]
    fn test_advance_then_retreat_is_identity_away_from_boundaries() {
        let count = 6;
        for index in 0..count - 1 {
            let state = walk_to(count, index);
            assert_eq!(state.advance().retreat(), state);
        }
        for index in 1..count {
            let state = walk_to(count, index);
            assert_eq!(state.retreat().advance(), state);
        }
    }

    #[test]
    fn test_boundaries_are_idempotent() {
        let first = NavigationState::new(4).unwrap();
        assert_eq!(first.retreat(), first);
        assert_eq!(first.retreat().retreat(), first);

        let last = walk_to(4, 3);
        assert!(last.is_last());
        assert_eq!(last.advance(), last);
        assert_eq!(last.advance().advance(), last);
        // Last is still navigable backwards
        assert_eq!(last.retreat().current_index(), 2);
    }

    #[test]
    fn test_three_module_walk() {
        let state = NavigationState::new(3).unwrap().advance().advance();
        assert_eq!(state.current_index(), 2);
        assert_eq!(state.progress(), 100.0);

        let state = state.advance();
        assert_eq!(state.current_index(), 2);

        let state = state.retreat();
        assert_eq!(state.current_index(), 1);
        assert!((state.progress() - 66.666_666).abs() < 1e-3);
    }

    #[test]
    fn test_current_module() {
        let course = Course::builtin().unwrap();
        let state = NavigationState::new(course.len()).unwrap().advance();
        let module = state.current_module(course.modules()).unwrap();
        assert_eq!(module.index, 1);
        assert_eq!(module.icon, "branch");
    }

    #[test]
    fn test_current_module_length_mismatch() {
        let course = Course::builtin().unwrap();
        let state = NavigationState::new(5).unwrap();
        let err = state.current_module(course.modules()).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::ModuleCountMismatch { expected: 5, found: 3 }
        ));
    }
}
