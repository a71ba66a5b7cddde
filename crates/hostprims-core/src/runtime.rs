//! Language runtime identity.
//!
//! Unlike OS classification this is not table-driven: the runtime
//! resolver special-cases a handful of engine markers. The raw facts come
//! in through [`RuntimeFacts`], the narrow interface to whatever hosting
//! runtime (or process manager) is able to describe itself; a compiled
//! library cannot introspect a hosting VM on its own.

use crate::ident::{Ident, Identity};
use serde::Serialize;
use std::env;

/// The default/reference runtime identifier, assumed when no engine
/// marker is present.
const DEFAULT_RUNTIME: Ident = Ident::from_static("mri");

/// JIT identifier when no JIT is active or known.
const NO_JIT: Ident = Ident::from_static("none");

// ============================================================================
// Runtime Facts
// ============================================================================

/// Raw description of the hosting runtime.
///
/// Embedders that know their runtime fill this in directly; the ambient
/// default reads the `RUNTIME_PLATFORM`, `RUNTIME_ENGINE`, and
/// `RUNTIME_DESCRIPTION` environment variables. Every field is optional -
/// absence selects the documented defaults.
#[derive(Debug, Clone, Default)]
pub struct RuntimeFacts {
    /// Platform string reported by the runtime (e.g. `"parrot"`).
    pub platform: Option<String>,

    /// Engine marker (e.g. `"ruby"`, `"jruby"`, `"truffleruby"`).
    pub engine: Option<String>,

    /// Free-form description/version banner.
    pub description: Option<String>,

    /// Explicit JIT status flag, when the runtime exposes one.
    /// Overrides whatever the description suggests.
    pub jit_enabled: Option<bool>,
}

impl RuntimeFacts {
    /// Gather facts from the process environment.
    pub fn from_env() -> Self {
        RuntimeFacts {
            platform: non_empty(env::var("RUNTIME_PLATFORM").ok()),
            engine: non_empty(env::var("RUNTIME_ENGINE").ok()),
            description: non_empty(env::var("RUNTIME_DESCRIPTION").ok()),
            jit_enabled: None,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

// ============================================================================
// Runtime Identity
// ============================================================================

/// The classified runtime `(id, jit)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuntimeIdentity {
    id: Ident,
    jit: Ident,
}

impl RuntimeIdentity {
    /// Classify the ambient runtime facts.
    pub fn detect() -> Self {
        Self::from_facts(&RuntimeFacts::from_env())
    }

    /// Classify explicit runtime facts.
    ///
    /// Resolution order:
    /// 1. platform `parrot` is the Cardinal runtime;
    /// 2. no engine marker means the default/reference runtime (`mri`);
    /// 3. any engine marker other than `ruby` is taken verbatim, so
    ///    unmodeled engines still produce a usable identifier;
    /// 4. engine `ruby` resolves to `ree` when the description mentions
    ///    "enterprise", else `mri`.
    pub fn from_facts(facts: &RuntimeFacts) -> Self {
        RuntimeIdentity {
            id: identify_engine(facts),
            jit: identify_jit(facts),
        }
    }

    /// JIT flavor identifier (`yjit`, `mjit`, `rjit`, `none`, ...).
    pub fn jit(&self) -> &Ident {
        &self.jit
    }

    /// Whether any JIT was detected as active.
    pub fn jit_enabled(&self) -> bool {
        self.jit != NO_JIT
    }

    /// Whether this is the default/reference runtime.
    pub fn is_mri(&self) -> bool {
        self.id == "mri"
    }

    /// Alias for [`is_mri`](Self::is_mri).
    pub fn is_default(&self) -> bool {
        self.is_mri()
    }

    /// Whether this is the JVM-based runtime.
    pub fn is_jruby(&self) -> bool {
        self.id == "jruby"
    }

    /// Alias for [`is_jruby`](Self::is_jruby).
    pub fn is_java(&self) -> bool {
        self.is_jruby()
    }

    /// Whether this is the Parrot-based Cardinal runtime.
    pub fn is_cardinal(&self) -> bool {
        self.id == "cardinal"
    }

    /// Alias for [`is_cardinal`](Self::is_cardinal).
    pub fn is_parrot(&self) -> bool {
        self.is_cardinal()
    }

    /// Whether this is the Rubinius runtime.
    pub fn is_rbx(&self) -> bool {
        self.id == "rbx"
    }

    /// Alias for [`is_rbx`](Self::is_rbx).
    pub fn is_rubinius(&self) -> bool {
        self.is_rbx()
    }

    /// Whether this is the Enterprise Edition runtime.
    pub fn is_ree(&self) -> bool {
        self.id == "ree"
    }

    /// Alias for [`is_ree`](Self::is_ree).
    pub fn is_enterprise(&self) -> bool {
        self.is_ree()
    }
}

impl Identity for RuntimeIdentity {
    fn id(&self) -> &Ident {
        &self.id
    }
}

fn identify_engine(facts: &RuntimeFacts) -> Ident {
    if facts.platform.as_deref() == Some("parrot") {
        return Ident::from_static("cardinal");
    }
    let Some(engine) = facts.engine.as_deref() else {
        return DEFAULT_RUNTIME;
    };
    if engine != "ruby" {
        return Ident::new(engine);
    }
    match facts.description.as_deref() {
        Some(description) if description.to_lowercase().contains("enterprise") => {
            Ident::from_static("ree")
        }
        _ => DEFAULT_RUNTIME,
    }
}

fn identify_jit(facts: &RuntimeFacts) -> Ident {
    if facts.jit_enabled == Some(false) {
        return NO_JIT;
    }
    if let Some(description) = facts.description.as_deref() {
        let description = description.to_lowercase();
        for (marker, id) in [("+yjit", "yjit"), ("+mjit", "mjit"), ("+rjit", "rjit")] {
            if description.contains(marker) {
                return Ident::from_static(id);
            }
        }
    }
    // The runtime claims a JIT but does not name it.
    match facts.jit_enabled {
        Some(true) => Ident::from_static("jit"),
        _ => NO_JIT,
    }
}

// ============================================================================
// Tests
// ============================================================================
