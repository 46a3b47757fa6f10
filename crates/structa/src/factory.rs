//! The factory entry point.

use structa_core::{CtorAndArgs, LayoutError};

use crate::gate::GateGuard;
use crate::model::ArrayModel;

/// Build an array instance of type `A` described by `model`.
///
/// Arms the construction gate with the model's element type and length,
/// invokes `ctor_and_args`, and disarms the gate on every exit path.
/// The constructor is expected to call
/// [`StructuredArrayBase::from_gate`](crate::StructuredArrayBase::from_gate)
/// exactly once; its errors, including a negative length, are returned
/// unchanged. The returned instance is allocated but unpopulated.
///
/// `E: From<LayoutError>` lets the constructor forward `from_gate`
/// failures with `?`, whatever error type it reports.
///
/// ```
/// use structa::{instantiate, ArrayModel, CtorAndArgs, LayoutError, StructuredArrayBase};
///
/// struct Readings {
///     base: StructuredArrayBase<f64>,
///     label: String,
/// }
///
/// fn readings(label: String) -> Result<Readings, LayoutError> {
///     Ok(Readings { base: StructuredArrayBase::from_gate()?, label })
/// }
///
/// let model = ArrayModel::new::<f64>(8);
/// let r = instantiate(&model, CtorAndArgs::new(readings, "probe".to_string())).unwrap();
/// assert_eq!(r.base.len(), 8);
/// assert_eq!(r.label, "probe");
/// ```
pub fn instantiate<A, Args, E>(
    model: &ArrayModel,
    ctor_and_args: CtorAndArgs<A, Args, E>,
) -> Result<A, E>
where
    E: From<LayoutError>,
{
    let _guard = GateGuard::arm(model.gate_params());
    ctor_and_args.construct()
}
