use std::fmt;

use uuid::Uuid;

use crate::config::{
    AppConfig, BUDGETGROUP_RANGE, COA_DETAILCODE_LENGTH, COA_MAJORCODE_LENGTH,
    COA_MINORCODE_LENGTH, EGF_MODULE,
};
use crate::domain::common::sort_by_name;
use crate::domain::{BudgetGroup, ChartOfAccounts, Registry};

use super::{ServiceError, ServiceResult};

/// One failed budget-group validation check. Carries the name of the group
/// already owning the conflicting code or range; `Display` renders the
/// user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetGroupViolation {
    DuplicateMajorCode { owner: String },
    RangeOverlap { owner: String },
    MajorCodeInMappedRange { owner: String },
    MaxCodeOwnedElsewhere { owner: String },
    MinCodeOwnedElsewhere { owner: String },
}

impl fmt::Display for BudgetGroupViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateMajorCode { owner } => {
                write!(f, "Major code is already mapped to budget group `{}`", owner)
            }
            Self::RangeOverlap { owner } => {
                write!(f, "Min/max code range overlaps budget group `{}`", owner)
            }
            Self::MajorCodeInMappedRange { owner } => write!(
                f,
                "Major code falls within the range mapped to budget group `{}`",
                owner
            ),
            Self::MaxCodeOwnedElsewhere { owner } => write!(
                f,
                "Max code's major segment belongs to budget group `{}`",
                owner
            ),
            Self::MinCodeOwnedElsewhere { owner } => write!(
                f,
                "Min code's major segment belongs to budget group `{}`",
                owner
            ),
        }
    }
}

pub struct BudgetingGroupService;

impl BudgetingGroupService {
    /// Persists a new group. Validation is a separate, caller-invoked step.
    pub fn create(registry: &mut Registry, group: BudgetGroup) -> Uuid {
        tracing::info!(name = %group.name, "creating budget group");
        registry.add_budget_group(group)
    }

    /// Replaces the stored group with the same id.
    pub fn update(registry: &mut Registry, changes: BudgetGroup) -> ServiceResult<()> {
        let group = registry
            .budget_group_mut(changes.id)
            .ok_or_else(|| ServiceError::NotFound(format!("Budget group {}", changes.id)))?;
        group.name = changes.name;
        group.description = changes.description;
        group.major_code = changes.major_code;
        group.min_code = changes.min_code;
        group.max_code = changes.max_code;
        group.active = changes.active;
        registry.touch();
        Ok(())
    }

    /// All groups, ordered by name ascending.
    pub fn find_all(registry: &Registry) -> Vec<&BudgetGroup> {
        let mut groups: Vec<&BudgetGroup> = registry.budget_groups.iter().collect();
        sort_by_name(&mut groups);
        groups
    }

    pub fn find_one(registry: &Registry, id: Uuid) -> Option<&BudgetGroup> {
        registry.budget_group(id)
    }

    /// Configured major-code segment length for the EGF module.
    pub fn major_code_length(config: &AppConfig) -> ServiceResult<usize> {
        config_length(config, COA_MAJORCODE_LENGTH)
    }

    /// Chart-of-accounts rows whose glcode has the major-code length.
    pub fn major_code_list<'a>(
        registry: &'a Registry,
        config: &AppConfig,
    ) -> ServiceResult<Vec<&'a ChartOfAccounts>> {
        let length = Self::major_code_length(config)?;
        Ok(coa_by_length(registry, length))
    }

    /// Chart-of-accounts rows eligible as range bounds. The configured
    /// `budgetgroup_range` mode selects the minor-code length when it reads
    /// `minor` (case-insensitive), the detail-code length otherwise.
    pub fn min_code_list<'a>(
        registry: &'a Registry,
        config: &AppConfig,
    ) -> ServiceResult<Vec<&'a ChartOfAccounts>> {
        let range = config.require(EGF_MODULE, BUDGETGROUP_RANGE)?;
        let length = if range.eq_ignore_ascii_case("minor") {
            config_length(config, COA_MINORCODE_LENGTH)?
        } else {
            config_length(config, COA_DETAILCODE_LENGTH)?
        };
        Ok(coa_by_length(registry, length))
    }

    /// Runs the fixed uniqueness/overlap check sequence against every other
    /// group and collects each violation in check order. Checks whose input
    /// codes are unset are skipped; the candidate's own id never conflicts
    /// with itself, so updates re-validate cleanly.
    pub fn validate(
        registry: &Registry,
        config: &AppConfig,
        candidate: &BudgetGroup,
    ) -> ServiceResult<Vec<BudgetGroupViolation>> {
        let mut violations = Vec::new();

        let major = resolve_code(registry, candidate.major_code);
        let min = resolve_code(registry, candidate.min_code);
        let max = resolve_code(registry, candidate.max_code);

        if let Some(major_id) = candidate.major_code {
            if let Some(owner) = others(registry, candidate)
                .find(|group| group.major_code == Some(major_id))
            {
                violations.push(BudgetGroupViolation::DuplicateMajorCode {
                    owner: owner.name.clone(),
                });
            }
        }

        if let (Some(min), Some(max)) = (min, max) {
            let overlapping = others(registry, candidate).find(|group| {
                range_of(registry, group).is_some_and(|(lo, hi)| {
                    lo.glcode.as_str() <= max.glcode.as_str()
                        && hi.glcode.as_str() >= min.glcode.as_str()
                })
            });
            if let Some(owner) = overlapping {
                violations.push(BudgetGroupViolation::RangeOverlap {
                    owner: owner.name.clone(),
                });
            }
        }

        if let Some(major) = major {
            let mapped = others(registry, candidate).find(|group| {
                range_of(registry, group).is_some_and(|(lo, hi)| {
                    prefix_brackets(lo, hi, &major.glcode)
                })
            });
            if let Some(owner) = mapped {
                violations.push(BudgetGroupViolation::MajorCodeInMappedRange {
                    owner: owner.name.clone(),
                });
            }
        }

        // The prefix checks need the configured segment length; only reach
        // for configuration when a range bound is actually set.
        if min.is_some() || max.is_some() {
            let major_length = Self::major_code_length(config)?;
            if let Some(owner) = max.and_then(|code| major_owner(registry, candidate, code, major_length)) {
                violations.push(BudgetGroupViolation::MaxCodeOwnedElsewhere { owner });
            }
            if let Some(owner) = min.and_then(|code| major_owner(registry, candidate, code, major_length)) {
                violations.push(BudgetGroupViolation::MinCodeOwnedElsewhere { owner });
            }
        }

        if !violations.is_empty() {
            tracing::debug!(
                group = %candidate.name,
                count = violations.len(),
                "budget group validation failed"
            );
        }
        Ok(violations)
    }

    /// Name search: a given filter matches as a case-insensitive substring and
    /// returns groups in registry order; without a filter every group is
    /// returned in name order.
    pub fn search<'a>(registry: &'a Registry, name: Option<&str>) -> Vec<&'a BudgetGroup> {
        match name {
            Some(filter) => {
                let needle = filter.to_ascii_lowercase();
                registry
                    .budget_groups
                    .iter()
                    .filter(|group| group.name.to_ascii_lowercase().contains(&needle))
                    .collect()
            }
            None => Self::find_all(registry),
        }
    }
}

fn config_length(config: &AppConfig, key: &str) -> ServiceResult<usize> {
    let raw = config.require(EGF_MODULE, key)?;
    raw.trim().parse::<usize>().map_err(|_| {
        ServiceError::Invalid(format!("Configuration value `{}` is not a length: `{}`", key, raw))
    })
}

fn coa_by_length(registry: &Registry, length: usize) -> Vec<&ChartOfAccounts> {
    registry
        .chart_of_accounts
        .iter()
        .filter(|code| code.glcode_len() == length)
        .collect()
}

fn resolve_code(registry: &Registry, id: Option<Uuid>) -> Option<&ChartOfAccounts> {
    registry.chart_of_accounts(id?)
}

fn others<'a>(
    registry: &'a Registry,
    candidate: &'a BudgetGroup,
) -> impl Iterator<Item = &'a BudgetGroup> {
    registry
        .budget_groups
        .iter()
        .filter(move |group| group.id != candidate.id)
}

fn range_of<'a>(
    registry: &'a Registry,
    group: &BudgetGroup,
) -> Option<(&'a ChartOfAccounts, &'a ChartOfAccounts)> {
    let lo = registry.chart_of_accounts(group.min_code?)?;
    let hi = registry.chart_of_accounts(group.max_code?)?;
    Some((lo, hi))
}

/// Whether `glcode` sits inside the `[lo, hi]` range when both bounds are
/// truncated to the glcode's own length. Bounds shorter than the glcode are
/// skipped rather than sliced out of range.
fn prefix_brackets(lo: &ChartOfAccounts, hi: &ChartOfAccounts, glcode: &str) -> bool {
    match (lo.glcode_prefix(glcode.len()), hi.glcode_prefix(glcode.len())) {
        (Some(lo), Some(hi)) => lo <= glcode && hi >= glcode,
        _ => false,
    }
}

/// Name of another group whose major code equals `code`'s leading
/// major-length segment, if any.
fn major_owner(
    registry: &Registry,
    candidate: &BudgetGroup,
    code: &ChartOfAccounts,
    major_length: usize,
) -> Option<String> {
    let prefix = code.glcode_prefix(major_length)?;
    others(registry, candidate)
        .find(|group| {
            resolve_code(registry, group.major_code)
                .is_some_and(|major| major.glcode == prefix)
        })
        .map(|group| group.name.clone())
}
