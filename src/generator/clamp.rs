//! The numeric clamp-overload generator.
//!
//! One `Clamp` extension-method overload per numeric type, with the
//! implementation strategy selected by type category: integer-like types get a
//! direct branch comparison, fractional types a `Math.Max`/`Math.Min`
//! composition. The host language has no numeric-operation abstraction cheap
//! enough to use here, so generation trades source duplication for textual
//! consistency across the overload set.

use std::io::Write;

use tracing::{debug, info};

use super::emit::Emitter;
use super::templates::{render_unit, ClampBindings, CLAMP_BRANCH, CLAMP_MIN_MAX};

/// How a clamp overload is implemented for one numeric type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClampStrategy {
    /// `x < min ? min : max < x ? max : x`, with a `Debug.Assert(min <= max)`.
    Branch,
    /// `Math.Max(min, Math.Min(x, max))`, no assertion.
    MinMaxCompose,
}

/// One entry of the type classification table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericType {
    pub name: &'static str,
    pub strategy: ClampStrategy,
}

const fn branch(name: &'static str) -> NumericType {
    NumericType {
        name,
        strategy: ClampStrategy::Branch,
    }
}

const fn min_max(name: &'static str) -> NumericType {
    NumericType {
        name,
        strategy: ClampStrategy::MinMaxCompose,
    }
}

/// The clamp parameter domain. Declared order is emission order: the
/// integer-like types first, then the fractional types.
pub const NUMERIC_TYPES: [NumericType; 11] = [
    branch("byte"),
    branch("sbyte"),
    branch("short"),
    branch("ushort"),
    branch("int"),
    branch("uint"),
    branch("long"),
    branch("ulong"),
    min_max("float"),
    min_max("double"),
    min_max("decimal"),
];

/// Looks up the strategy for a type name, `None` for types outside the domain.
pub fn strategy_for(name: &str) -> Option<ClampStrategy> {
    NUMERIC_TYPES
        .iter()
        .find(|ty| ty.name == name)
        .map(|ty| ty.strategy)
}

/// Emits the full clamp overload set, wrapped in region markers, two blank
/// lines after each overload.
pub fn write_clamp_overloads<W: Write>(out: W) -> anyhow::Result<()> {
    let mut emitter = Emitter::with_gap(out, 2);
    emitter.line("#region Clamp generated")?;
    for ty in &NUMERIC_TYPES {
        let template = match ty.strategy {
            ClampStrategy::Branch => CLAMP_BRANCH,
            ClampStrategy::MinMaxCompose => CLAMP_MIN_MAX,
        };
        let unit = render_unit(template, &ClampBindings { r#type: ty.name })?;
        debug!(ty = ty.name, "rendered clamp overload");
        emitter.unit(&unit)?;
    }
    emitter.line("#endregion")?;
    info!(overloads = NUMERIC_TYPES.len(), "clamp generation pass complete");
    Ok(())
}
