use crate::config::Vocabulary;
use crate::datasheet::Datasheet;
use crate::error::{PullingError, Result};
use crate::modules::default_modules;
use crate::types::{ManeuverRecord, Module, Program};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// EvalContext
// ---------------------------------------------------------------------------

/// Everything a predicate or generator may read. Nothing in it is mutated.
#[derive(Clone, Copy)]
pub struct EvalContext<'a> {
    pub sheet: &'a Datasheet,
    pub vocabulary: &'a Vocabulary,
}

impl<'a> EvalContext<'a> {
    pub fn new(sheet: &'a Datasheet, vocabulary: &'a Vocabulary) -> Self {
        Self { sheet, vocabulary }
    }
}

// ---------------------------------------------------------------------------
// ModuleRule
// ---------------------------------------------------------------------------

/// A module of the program: when it runs and what it emits.
pub struct ModuleRule {
    pub module: Module,
    pub condition: fn(&EvalContext) -> bool,
    pub generate: fn(&EvalContext) -> Result<Vec<ManeuverRecord>>,
}

/// Activation outcome of one module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activation {
    pub module: Module,
    pub active: bool,
}

// ---------------------------------------------------------------------------
// Assembler
// ---------------------------------------------------------------------------

pub struct Assembler {
    modules: Vec<ModuleRule>,
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new(default_modules())
    }
}

impl Assembler {
    /// Modules always run in [`Module::all`] order, whatever order they are given in.
    pub fn new(mut modules: Vec<ModuleRule>) -> Self {
        modules.sort_by_key(|m| m.module);
        Self { modules }
    }

    pub fn activations(&self, ctx: &EvalContext) -> Vec<Activation> {
        self.modules
            .iter()
            .map(|m| Activation {
                module: m.module,
                active: (m.condition)(ctx),
            })
            .collect()
    }

    /// Concatenate the output of every active module. The first generator
    /// error aborts the whole program; no partial program is returned.
    pub fn assemble(&self, ctx: &EvalContext) -> Result<Program> {
        let first = self.modules.first().map(|m| m.module);
        let last = self.modules.last().map(|m| m.module);
        if first != Some(Module::Start) || last != Some(Module::Finalize) {
            return Err(PullingError::Defect(
                "module table must open with start and close with finalize".to_string(),
            ));
        }

        let mut program = Program::new();
        let mut ran = 0usize;
        for rule in &self.modules {
            let active = (rule.condition)(ctx);
            tracing::debug!(module = %rule.module, active, "module activation");
            if !active {
                continue;
            }
            let records = (rule.generate)(ctx)?;
            program.extend(records);
            ran += 1;
        }
        tracing::debug!(
            well = %ctx.sheet.well_id,
            modules = ran,
            records = program.len(),
            "program assembled"
        );
        Ok(program)
    }
}

/// Generate the work program for one datasheet with the default module table.
pub fn generate_program(sheet: &Datasheet, vocabulary: &Vocabulary) -> Result<Program> {
    Assembler::default().assemble(&EvalContext::new(sheet, vocabulary))
}

/// Activation of every module for one datasheet, in execution order.
pub fn active_modules(sheet: &Datasheet, vocabulary: &Vocabulary) -> Vec<Activation> {
    Assembler::default().activations(&EvalContext::new(sheet, vocabulary))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
