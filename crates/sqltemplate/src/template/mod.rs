//! SELECT/UPDATE template builder with named placeholders.
//!
//! [`TemplateBuilder`] accumulates an action (select or update), a table,
//! assignments, filters, an ordering and a row limit, then renders two things:
//!
//! - a SQL template in which every value is replaced by a `#{key}` placeholder;
//! - the map from placeholder key to bound value, in ascending key order.
//!
//! Placeholder keys are derived from the column and the operation
//! (`statuseq`, `agegtEq`, `C1set`, `idin0`, ...), so the same chain always
//! renders the same template.
//!
//! The `#{key}` syntax is kept verbatim. Translating it into driver bind
//! markers is left to whatever executes the statement.
//!
//! # Example
//!
//! ```
//! use sqltemplate::TemplateBuilder;
//!
//! let builder = TemplateBuilder::new()
//!     .select("id, name")
//!     .table("users")
//!     .eq("status", "ACTIVE")
//!     .in_list("role", ["admin", "dev"])
//!     .fetch_first_x(10);
//!
//! assert_eq!(
//!     builder.build_template().unwrap(),
//!     "SELECT id, name FROM users WHERE status = #{statuseq} \
//!      AND role IN (#{rolein0},#{rolein1}) FETCH FIRST #{fetchFirstX} ROWS ONLY"
//! );
//! assert_eq!(builder.build_params().len(), 4);
//! ```

mod params;

use params::Params;

use crate::error::{TemplateError, TemplateResult};
use crate::value::{IntoParam, ParamValue};
use serde::Serialize;
use std::collections::BTreeMap;

const ORDER_BY_KEY: &str = "orderBy";
const FETCH_FIRST_KEY: &str = "fetchFirstX";

/// Which statement the builder renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Nothing configured yet; rendering fails.
    #[default]
    Unset,
    /// `SELECT <columns> FROM <table>`
    Select {
        /// Projection, rendered as given
        columns: String,
    },
    /// `UPDATE <table> SET <assignments>`
    Update,
}

/// A rendered template together with its parameters.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BuiltTemplate {
    /// SQL text with `#{key}` placeholders
    pub template: String,
    /// Placeholder key to bound value, ascending by key
    pub params: BTreeMap<String, ParamValue>,
}

/// Fluent builder for SELECT/UPDATE templates.
///
/// Every configuration call takes the builder by value and returns it. A call
/// whose value is absent (`None`, or an empty `IN` set) changes nothing.
///
/// Calling the same operation twice on the same column reuses the placeholder
/// key: the second value replaces the first in the params while both
/// fragments stay in the template.
#[derive(Clone, Debug, Default)]
pub struct TemplateBuilder {
    /// Action clause selector
    mode: Mode,
    /// Target table
    table: Option<String>,
    /// `col = #{colset}` fragments, call order
    assignments: Vec<String>,
    /// WHERE fragments, call order
    criteria: Vec<String>,
    /// Rendered ORDER BY clause
    order_by: Option<String>,
    /// Rendered FETCH FIRST clause
    fetch: Option<String>,
    /// Bound values
    params: Params,
}

impl TemplateBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Mode & table ====================

    /// Enter select mode on `table`: `SELECT <columns> FROM <table>`.
    pub fn select_mode(self, columns: &str, table: &str) -> Self {
        self.select(columns).table(table)
    }

    /// Enter update mode on `table`: `UPDATE <table> SET ...`.
    pub fn update_mode(self, table: &str) -> Self {
        self.update(true).table(table)
    }

    /// Set the projection and enter select mode.
    pub fn select<'a>(mut self, columns: impl Into<Option<&'a str>>) -> Self {
        if let Some(columns) = columns.into() {
            self.mode = Mode::Select {
                columns: columns.to_string(),
            };
        }
        self
    }

    /// Toggle update mode.
    ///
    /// `false` only has an effect when the builder is in update mode, which it
    /// leaves unset again.
    pub fn update(mut self, update: bool) -> Self {
        if update {
            self.mode = Mode::Update;
        } else if self.mode == Mode::Update {
            self.mode = Mode::Unset;
        }
        self
    }

    /// Set the target table.
    pub fn table<'a>(mut self, table: impl Into<Option<&'a str>>) -> Self {
        if let Some(table) = table.into() {
            self.table = Some(table.to_string());
        }
        self
    }

    // ==================== SET ====================

    /// Add assignment: `column = #{<column>set}`.
    pub fn set(mut self, column: &str, value: impl IntoParam) -> Self {
        if let Some(value) = value.into_param() {
            let key = format!("{}set", column);
            self.assignments
                .push(format!("{} = {}", column, params::placeholder(&key)));
            self.params.insert(key, value);
        }
        self
    }

    /// Add assignment of a serialized JSON value.
    pub fn set_json<T: Serialize>(self, column: &str, value: &T) -> serde_json::Result<Self> {
        let json_val = serde_json::to_value(value)?;
        Ok(self.set(column, ParamValue::Json(json_val)))
    }

    // ==================== WHERE conditions ====================

    /// Add WHERE: `column = #{<column>eq}`
    pub fn eq(self, column: &str, value: impl IntoParam) -> Self {
        self.compare(column, "=", "eq", value)
    }

    /// Add WHERE: `column >= #{<column>gtEq}`
    pub fn gt_eq(self, column: &str, value: impl IntoParam) -> Self {
        self.compare(column, ">=", "gtEq", value)
    }

    /// Add WHERE: `column <= #{<column>ltEq}`
    pub fn lt_eq(self, column: &str, value: impl IntoParam) -> Self {
        self.compare(column, "<=", "ltEq", value)
    }

    /// Add WHERE: `column IN (#{<column>in0},#{<column>in1},...)`
    ///
    /// Values are sorted by their natural order (floats by `f64::total_cmp`),
    /// deduplicated, then numbered from zero. The placeholder list is rendered
    /// in string order of the keys, so with eleven or more values `in10` comes
    /// before `in2`. Absent elements are dropped before numbering; an empty
    /// result is a no-op.
    ///
    /// A second call on the same column numbers its values from zero again,
    /// so it overwrites the first call's values key by key: keys beyond the
    /// second list's length keep their earlier value, and the first `IN`
    /// clause ends up bound to a mix of both lists.
    pub fn in_list<I, T>(mut self, column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: IntoParam,
    {
        let mut ordered: Vec<ParamValue> = values
            .into_iter()
            .filter_map(IntoParam::into_param)
            .collect();
        ordered.sort_by(ParamValue::total_cmp);
        ordered.dedup_by(|a, b| a.total_cmp(b).is_eq());

        let entries = params::in_keys(column, ordered);
        if entries.is_empty() {
            return self;
        }

        let list = params::in_placeholders(&entries);
        self.criteria.push(format!("{} IN ({})", column, list));
        self.params.extend(entries);
        self
    }

    /// Add WHERE IN for an optional set (`None` => skip).
    pub fn in_list_opt<I, T>(self, column: &str, values: Option<I>) -> Self
    where
        I: IntoIterator<Item = T>,
        T: IntoParam,
    {
        match values {
            Some(values) => self.in_list(column, values),
            None => self,
        }
    }

    fn compare(mut self, column: &str, op: &str, suffix: &str, value: impl IntoParam) -> Self {
        if let Some(value) = value.into_param() {
            let key = format!("{}{}", column, suffix);
            self.criteria
                .push(format!("{} {} {}", column, op, params::placeholder(&key)));
            self.params.insert(key, value);
        }
        self
    }

    // ==================== ORDER BY / FETCH ====================

    /// Set ORDER BY; the expression itself is bound as `#{orderBy}`.
    ///
    /// Replaces any earlier ordering.
    pub fn order_by<'a>(mut self, by: impl Into<Option<&'a str>>) -> Self {
        if let Some(by) = by.into() {
            self.order_by = Some(format!("ORDER BY {}", params::placeholder(ORDER_BY_KEY)));
            self.params.insert(ORDER_BY_KEY, ParamValue::from(by));
        }
        self
    }

    /// Set `FETCH FIRST #{fetchFirstX} ROWS ONLY`.
    ///
    /// Replaces any earlier limit.
    pub fn fetch_first_x(mut self, count: impl Into<Option<i64>>) -> Self {
        if let Some(count) = count.into() {
            self.fetch = Some(format!(
                "FETCH FIRST {} ROWS ONLY",
                params::placeholder(FETCH_FIRST_KEY)
            ));
            self.params.insert(FETCH_FIRST_KEY, ParamValue::from(count));
        }
        self
    }

    // ==================== Accessors ====================

    /// Current mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Number of bound placeholders.
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// Whether any WHERE fragment has been added.
    pub fn has_criteria(&self) -> bool {
        !self.criteria.is_empty()
    }

    // ==================== Build ====================

    /// Render the SQL template.
    ///
    /// Fails with [`TemplateError::Configuration`] when neither select nor
    /// update mode is configured. An unset table renders as an empty name.
    pub fn build_template(&self) -> TemplateResult<String> {
        let table = self.table.as_deref().unwrap_or_default();

        let mut sql = match &self.mode {
            Mode::Unset => {
                return Err(TemplateError::configuration(
                    "either select or update mode must be configured",
                ));
            }
            Mode::Select { columns } => format!("SELECT {} FROM {}", columns, table),
            Mode::Update => format!("UPDATE {} SET {}", table, self.assignments.join(",")),
        };

        if !self.criteria.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.criteria.join(" AND "));
        }

        for clause in [&self.order_by, &self.fetch].into_iter().flatten() {
            sql.push(' ');
            sql.push_str(clause);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "sqltemplate",
            template = %sql,
            params = self.params.len(),
            "rendered template"
        );

        Ok(sql)
    }

    /// Render the parameters in ascending key order.
    pub fn build_params(&self) -> BTreeMap<String, ParamValue> {
        self.params.sorted()
    }

    /// Render template and parameters together.
    pub fn build(&self) -> TemplateResult<BuiltTemplate> {
        Ok(BuiltTemplate {
            template: self.build_template()?,
            params: self.build_params(),
        })
    }

    /// Get the template string (for debugging); empty if no mode is set.
    pub fn to_template(&self) -> String {
        self.build_template().unwrap_or_default()
    }
}
