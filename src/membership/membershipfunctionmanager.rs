use serde::Deserialize;
use tracing::debug;

use crate::manager::manager::{FrozenManager, ManagerBuilder};
use crate::manager::managererror::{ManagerError, parse_json_value};
use crate::membership::membershipfunction::MembershipFunction;
use crate::membership::membershipfunctionkind::MembershipFunctionKind;
use crate::membership::trapezoid::{Trapezoid, TrapezoidJsonProp};
use crate::membership::triangle::{Triangle, TriangleJsonProp};

#[derive(Deserialize)]
pub enum MembershipFunctionType {
    Triangle,
    Trapezoid
}

#[derive(Deserialize)]
struct MembershipFunctionTypedObject {
    function_type: MembershipFunctionType
}

fn triangle_from_json(name: &str, json_value: serde_json::Value) -> Result<MembershipFunctionKind, ManagerError> {
    let json_prop: TriangleJsonProp = parse_json_value(json_value)?;
    let triangle = Triangle::new(json_prop.a, json_prop.b, json_prop.c)
        .map_err(|error| ManagerError::construction(name, error))?;
    Ok(triangle.into())
}

fn trapezoid_from_json(name: &str, json_value: serde_json::Value) -> Result<MembershipFunctionKind, ManagerError> {
    let json_prop: TrapezoidJsonProp = parse_json_value(json_value)?;
    let trapezoid = Trapezoid::new(json_prop.a, json_prop.b, json_prop.c, json_prop.d)
        .map_err(|error| ManagerError::construction(name, error))?;
    Ok(trapezoid.into())
}

pub fn get_membership_function_from_json(name: &str, json_value: serde_json::Value) -> Result<MembershipFunctionKind, ManagerError> {
    let typed_object: MembershipFunctionTypedObject = parse_json_value(json_value.clone())?;
    let membership_function = match typed_object.function_type {
        MembershipFunctionType::Triangle  => triangle_from_json(name, json_value),
        MembershipFunctionType::Trapezoid => trapezoid_from_json(name, json_value)
    }?;
    let (lo, hi) = membership_function.support();
    debug!(entry = name, shape = %membership_function.shape(), lo, hi, "membership function parsed");
    Ok(membership_function)
}

pub type MembershipFunctionManagerBuilder = ManagerBuilder<MembershipFunctionKind>;

pub type MembershipFunctionManager = FrozenManager<MembershipFunctionKind>;

pub fn membership_function_manager_builder() -> MembershipFunctionManagerBuilder {
    ManagerBuilder::new(get_membership_function_from_json)
}
