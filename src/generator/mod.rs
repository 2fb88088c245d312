//! Emit the `GeneratedAllocations` Solidity contract.
//!
//! The layout (including the odd blank lines with trailing spaces) is fixed
//! so regenerated files stay byte-identical to previously committed ones.

use std::fmt::Write;

use crate::error::{AllocgenError, Result};
use crate::model::{AllocationDataset, AllocationEntry, GeneratedArtifact};

pub const CONTRACT_NAME: &str = "GeneratedAllocations";
pub const VESTING_IMPORT: &str = "src/token/AllocationVesting.sol";
pub const VESTING_TYPE: &str = "AllocationVesting.LinearVesting";
pub const ARRAY_NAME: &str = "allAllocations";

const INDENT: &str = "    ";
const BODY_INDENT: &str = "        ";
const SEPARATOR: &str = "   ";

/// Renders the whole contract for `dataset`.
///
/// The array size is committed before any entry is written; the number of
/// `push` statements actually emitted must match it.
pub fn render(dataset: &AllocationDataset) -> Result<GeneratedArtifact> {
    let declared = dataset.total_allocations();
    let mut out = String::new();

    // ---------------------------------------------------------------
    // 1. Preamble & contract opening
    // ---------------------------------------------------------------
    writeln!(out, "// SPDX-License-Identifier: MIT")?;
    writeln!(out, "pragma solidity ^0.8.19;")?;
    writeln!(out)?;
    writeln!(out, "import \"{VESTING_IMPORT}\";")?;
    writeln!(out)?;
    writeln!(out, "contract {CONTRACT_NAME} {{")?;
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out)?;

    // ---------------------------------------------------------------
    // 2. Fixed-size array declaration
    // ---------------------------------------------------------------
    writeln!(
        out,
        "{SEPARATOR}{VESTING_TYPE}[] public {ARRAY_NAME} = new {VESTING_TYPE}[]({declared});"
    )?;
    writeln!(out)?;

    // ---------------------------------------------------------------
    // 3. Constructor, one block per category
    // ---------------------------------------------------------------
    writeln!(out, "{INDENT}constructor() {{")?;
    let mut emitted = 0usize;
    for category in &dataset.categories {
        writeln!(out, "{BODY_INDENT}// {} allocations", category.name)?;
        for entry in &category.entries {
            push_statement(&mut out, entry)?;
            emitted += 1;
        }
        writeln!(out, "{SEPARATOR}")?;
    }
    writeln!(out, "{INDENT}}}")?;
    writeln!(out, "}}")?;

    check_count(declared, emitted)?;

    Ok(GeneratedArtifact::new(out, declared))
}

/// The `push` count must equal the size declared for `allAllocations`.
fn check_count(declared: usize, emitted: usize) -> Result<()> {
    if emitted != declared {
        return Err(AllocgenError::CountMismatch { declared, emitted });
    }
    Ok(())
}

/// One `allAllocations.push(...)` line.
///
/// Argument order is (address, end allocation, start allocation, start date,
/// end date). The two allocations are swapped relative to the input field
/// names; check this against `LinearVesting`'s field order before changing it.
fn push_statement(out: &mut String, entry: &AllocationEntry) -> std::fmt::Result {
    writeln!(
        out,
        "{BODY_INDENT}{ARRAY_NAME}.push({VESTING_TYPE}({}, {}, {}, {}, {}));",
        entry.address,
        entry.allocation_at_end_date,
        entry.allocation_at_start_date,
        entry.start_date,
        entry.end_date,
    )
}
