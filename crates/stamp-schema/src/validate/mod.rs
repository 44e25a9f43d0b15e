//! Declaration validation and shared naming helpers.

pub mod naming;
pub mod reserved;

use crate::error::ErrorTree;

///
/// ValidateNode
///
/// Local structural checks for a declaration node. Nodes that own children
/// merge child trees under the child's name so errors stay routed.
///

pub trait ValidateNode {
    fn validate(&self) -> Result<(), ErrorTree> {
        Ok(())
    }
}
