use super::FieldErrors;

/// A field-level check. Returns the message to attach on failure.
pub type CheckFn<V> = fn(&V) -> Result<(), String>;

/// A cross-field refinement. Decides itself which field path to attach to.
pub type RefineFn<V> = fn(&V, &mut FieldErrors);

struct Check<V> {
    field: &'static str,
    run: CheckFn<V>,
}

/// Declarative rule set over a form value type.
///
/// Field checks all run (no short-circuit across fields), so one
/// submission can report errors on several fields at once. Refinements
/// run only once every field check has passed, mirroring how object-level
/// refinements behave in schema validators.
pub struct Schema<V> {
    checks: Vec<Check<V>>,
    refines: Vec<RefineFn<V>>,
}

impl<V> Schema<V> {
    pub fn new() -> Self {
        Self {
            checks: Vec::new(),
            refines: Vec::new(),
        }
    }

    /// Add a field-level rule; failures attach to `field`
    pub fn field(mut self, field: &'static str, run: CheckFn<V>) -> Self {
        self.checks.push(Check { field, run });
        self
    }

    /// Add a cross-field refinement
    pub fn refine(mut self, run: RefineFn<V>) -> Self {
        self.refines.push(run);
        self
    }

    pub fn validate(&self, value: &V) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        for check in &self.checks {
            if let Err(message) = (check.run)(value) {
                errors.push(check.field, message);
            }
        }

        if errors.is_empty() {
            for refine in &self.refines {
                refine(value, &mut errors);
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl<V> Default for Schema<V> {
    fn default() -> Self {
        Self::new()
    }
}
