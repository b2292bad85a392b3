//! Component style hooks: the per-component entry point that compiles,
//! emits, and merges classes into each slot.

use crate::css::compiler::{CompileError, CompiledStyles};
use crate::css::model::StyleDescription;
use crate::error::StyleError;
use crate::sheet::cache::RuleCache;
use crate::sheet::global;
use crate::slots::merger;
use crate::slots::state::ComponentState;
use crate::theme::resolver::TokenSource;

/// A component whose slots are styled by the engine.
///
/// Both style factories are pure: they may be called on every render and
/// must depend only on their arguments.
pub trait StyledComponent {
    /// Props the themed factory reads (state flags, appearance, ...).
    type Props;

    /// Component name, used in diagnostics.
    const NAME: &'static str;

    /// `(slot, public class)` pairs. The public class names are a versioned
    /// styling contract: renaming or removing one is a breaking change.
    fn slot_class_names() -> &'static [(&'static str, &'static str)];

    /// Theme-independent styles.
    fn base_styles() -> StyleDescription {
        StyleDescription::new()
    }

    /// Styles derived from theme tokens, chosen by props.
    fn themed_styles(_props: &Self::Props) -> StyleDescription {
        StyleDescription::new()
    }
}

fn check_slots<C: StyledComponent>(compiled: &CompiledStyles) -> Result<(), CompileError> {
    let declared = C::slot_class_names();
    for slot in compiled.slot_names() {
        if !declared.iter().any(|(name, _)| *name == slot) {
            return Err(CompileError::UnknownSlot {
                component: C::NAME.to_string(),
                slot: slot.to_string(),
            });
        }
    }
    Ok(())
}

/// Compute every slot's class list for one render of `C`.
///
/// Both descriptions are compiled and checked before anything is emitted,
/// so a malformed description never leaves rules behind in the cache. Every
/// slot's rules are emitted before any slot is merged, so `state` is left
/// untouched when the sheet rejects a rule.
pub fn compute_slot_styles<C, S>(
    state: &mut ComponentState,
    props: &C::Props,
    tokens: &S,
    cache: &mut RuleCache,
) -> Result<(), StyleError>
where
    C: StyledComponent,
    S: TokenSource + ?Sized,
{
    let compiler = cache.compiler();
    let base = compiler.compile(&C::base_styles(), tokens)?;
    let themed = compiler.compile(&C::themed_styles(props), tokens)?;
    check_slots::<C>(&base)?;
    check_slots::<C>(&themed)?;

    let mut emitted = Vec::with_capacity(C::slot_class_names().len());
    for (slot, public_class) in C::slot_class_names() {
        let mut classes = cache.emit_all(base.rules(slot))?;
        classes.extend(cache.emit_all(themed.rules(slot))?);
        emitted.push((*slot, *public_class, classes));
    }
    for (slot, public_class, classes) in emitted {
        merger::apply(state.slot_mut(slot), public_class, &classes);
    }
    Ok(())
}

/// [`compute_slot_styles`] against the process-wide cache.
pub fn compute_slot_styles_global<C, S>(
    state: &mut ComponentState,
    props: &C::Props,
    tokens: &S,
) -> Result<(), StyleError>
where
    C: StyledComponent,
    S: TokenSource + ?Sized,
{
    global::with_cache(|cache| compute_slot_styles::<C, S>(state, props, tokens, cache))
}
