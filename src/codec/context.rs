//! Decode state: current JSON path, nesting depth, collected issues

use serde_json::{Map, Value};
use tracing::{trace, warn};

use super::config::{DecodeConfig, EnumPolicy};
use super::error::{FieldIssue, IssueKind, WireType};
use super::{FieldSpec, FromWire};

#[derive(Debug, Clone)]
enum Segment {
    Key(String),
    Index(usize),
}

/// Mutable state threaded through one decode pass
#[derive(Debug)]
pub struct DecodeContext {
    config: DecodeConfig,
    path: Vec<Segment>,
    depth: usize,
    errors: Vec<FieldIssue>,
    warnings: Vec<FieldIssue>,
}

impl DecodeContext {
    pub fn new(config: DecodeConfig) -> Self {
        Self {
            config,
            path: Vec::new(),
            depth: 0,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn config(&self) -> &DecodeConfig {
        &self.config
    }

    /// Current JSON path, e.g. `lines[2].taxOverride.reason` (empty at the root)
    pub fn path(&self) -> String {
        render_path(&self.path)
    }

    /// Path of `key` below the current position
    pub fn path_with(&self, key: &str) -> String {
        let mut path = self.path();
        if !path.is_empty() {
            path.push('.');
        }
        path.push_str(key);
        path
    }

    pub fn errors(&self) -> &[FieldIssue] {
        &self.errors
    }

    pub fn warnings(&self) -> &[FieldIssue] {
        &self.warnings
    }

    /// Record an error at the current path
    pub fn error(&mut self, kind: IssueKind) {
        let path = self.path();
        self.errors.push(FieldIssue { path, kind });
    }

    /// Record a warning at the current path
    pub fn warning(&mut self, kind: IssueKind) {
        let path = self.path();
        self.warnings.push(FieldIssue { path, kind });
    }

    pub fn type_mismatch(&mut self, expected: &'static str, found: &Value) {
        self.error(IssueKind::TypeMismatch {
            expected,
            found: WireType::of(found),
        });
    }

    pub fn invalid_value(&mut self, expected: &'static str, reason: impl Into<String>) {
        self.error(IssueKind::InvalidValue {
            expected,
            reason: reason.into(),
        });
    }

    /// Run `f` with `key` appended to the path
    pub fn at_key<T>(&mut self, key: &str, f: impl FnOnce(&mut Self) -> T) -> T {
        self.path.push(Segment::Key(key.to_owned()));
        let out = f(self);
        self.path.pop();
        out
    }

    /// Run `f` with `[index]` appended to the path
    pub fn at_index<T>(&mut self, index: usize, f: impl FnOnce(&mut Self) -> T) -> T {
        self.path.push(Segment::Index(index));
        let out = f(self);
        self.path.pop();
        out
    }

    /// Enter one nesting level. Returns false (and records an error) past `max_depth`.
    pub(crate) fn descend(&mut self) -> bool {
        if self.depth >= self.config.max_depth {
            let max = self.config.max_depth;
            self.error(IssueKind::DepthExceeded { max });
            return false;
        }
        self.depth += 1;
        true
    }

    pub(crate) fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Move the last error to the warnings if it is an unknown enum token at `path`
    fn demote_unknown_token(&mut self, path: &str) -> bool {
        let demotable = self.errors.last().is_some_and(|issue| {
            issue.path == path && matches!(issue.kind, IssueKind::UnknownEnumToken { .. })
        });
        if !demotable {
            return false;
        }
        if let Some(issue) = self.errors.pop() {
            warn!(path = %issue.path, "{}; field left absent", issue.kind);
            self.warnings.push(issue);
        }
        true
    }

    pub(crate) fn into_parts(self) -> (Vec<FieldIssue>, Vec<FieldIssue>) {
        (self.errors, self.warnings)
    }
}

fn render_path(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Key(key) => {
                if !out.is_empty() {
                    out.push('.');
                }
                out.push_str(key);
            }
            Segment::Index(index) => {
                out.push('[');
                out.push_str(&index.to_string());
                out.push(']');
            }
        }
    }
    out
}

/// Field-by-field access to one JSON object
pub struct ObjectReader<'a> {
    model: &'static str,
    object: &'a Map<String, Value>,
    cx: &'a mut DecodeContext,
}

impl<'a> ObjectReader<'a> {
    pub fn new(model: &'static str, object: &'a Map<String, Value>, cx: &'a mut DecodeContext) -> Self {
        Self { model, object, cx }
    }

    /// Read a key that must be present. `null` counts as absent.
    pub fn required<T: FromWire>(&mut self, key: &'static str) -> Option<T> {
        let object = self.object;
        match object.get(key) {
            None | Some(Value::Null) => {
                let path = self.cx.path_with(key);
                self.cx.errors.push(FieldIssue {
                    path,
                    kind: IssueKind::MissingRequired { model: self.model },
                });
                None
            }
            Some(value) => self.cx.at_key(key, |cx| T::from_wire(value, cx)),
        }
    }

    /// Read a key that may be absent
    ///
    /// `Some(None)` means absent (or `null`, or an unknown enum token dropped in
    /// lenient mode); `None` means the value was present but unusable.
    pub fn optional<T: FromWire>(&mut self, key: &'static str) -> Option<Option<T>> {
        let object = self.object;
        let value = match object.get(key) {
            None | Some(Value::Null) => return Some(None),
            Some(value) => value,
        };

        let errors_before = self.cx.errors.len();
        match self.cx.at_key(key, |cx| T::from_wire(value, cx)) {
            Some(decoded) => Some(Some(decoded)),
            None => {
                let lenient = self.cx.config.enum_policy == EnumPolicy::Lenient;
                let path = self.cx.path_with(key);
                if lenient && self.cx.errors.len() == errors_before + 1 && self.cx.demote_unknown_token(&path) {
                    Some(None)
                } else {
                    None
                }
            }
        }
    }

    /// Note keys the model does not declare. Never an error.
    pub(crate) fn check_unknown_fields(&mut self, fields: &[FieldSpec]) {
        let object = self.object;
        let unknown = object
            .keys()
            .filter(|key| !fields.iter().any(|f| f.wire_key == key.as_str()));

        if self.cx.config.report_unknown_fields {
            for key in unknown {
                let path = self.cx.path_with(key);
                self.cx.warnings.push(FieldIssue {
                    path,
                    kind: IssueKind::UnknownField,
                });
            }
        } else {
            let count = unknown.count();
            if count > 0 {
                trace!(model = self.model, count, "ignoring unrecognized fields");
            }
        }
    }
}

/// Decode a JSON object through `build`, which reads the model's fields
///
/// Handles the object type check, nesting depth and unknown-key reporting.
pub fn decode_object<T>(
    value: &Value,
    cx: &mut DecodeContext,
    model: &'static str,
    fields: &'static [FieldSpec],
    build: impl FnOnce(&mut ObjectReader<'_>) -> Option<T>,
) -> Option<T> {
    let Some(object) = value.as_object() else {
        cx.type_mismatch(model, value);
        return None;
    };
    if !cx.descend() {
        return None;
    }

    let built = {
        let mut reader = ObjectReader::new(model, object, &mut *cx);
        let built = build(&mut reader);
        reader.check_unknown_fields(fields);
        built
    };

    cx.ascend();
    built
}
