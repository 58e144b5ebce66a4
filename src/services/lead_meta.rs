// ============================================================================
// LEAD META SERVICE - dictionary options + custom field definitions
// ============================================================================
// Shared cache behind the lead forms. Loads lazily, coalesces overlapping
// loads, and only refetches after invalidate() or an explicit force.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::api::dict::get_dict_items;
use crate::api::settings::get_custom_fields;
use crate::error::ApiError;
use crate::models::dict::DictOption;
use crate::models::settings::CustomField;
use crate::services::request::ApiClient;

/// Fixed base fields of the lead form; custom fields with these codes
/// override labels/required flags instead of adding new inputs.
const BASE_LEAD_FIELD_CODES: &[&str] = &[
    "name",
    "customer_name",
    "phone",
    "project",
    "status",
    "source",
    "city",
    "level",
    "owner",
    "tags",
    "remarks",
];

const FIELD_CODE_ALIASES: &[(&str, &str)] = &[("name", "customer_name")];

// Seed options shown when the backend dictionary comes back empty
const FALLBACK_STATUS_OPTIONS: &[(&str, &str)] = &[
    ("pending", "待跟进"),
    ("communicating", "初步沟通"),
    ("deep_following", "深度跟进"),
    ("invited", "已邀约"),
    ("visited", "已到访"),
    ("deposit_paid", "已交定金"),
    ("signed", "已签约"),
    ("invalid", "无效客户"),
    ("lost", "战败流失"),
];

const FALLBACK_SOURCE_OPTIONS: &[(&str, &str)] = &[
    ("douyin", "抖音广告"),
    ("baidu", "百度搜索"),
    ("expo", "线下展会"),
    ("referral", "转介绍"),
];

const FALLBACK_LEVEL_OPTIONS: &[(&str, &str)] = &[
    ("A", "A级"),
    ("B", "B级"),
    ("C", "C级"),
    ("D", "D级"),
];

const FALLBACK_TAG_OPTIONS: &[(&str, &str)] = &[
    ("high_value", "高净值"),
    ("franchise_exp", "曾加盟过"),
    ("mall_shop", "商场铺"),
    ("competitor_convert", "竞品转出"),
    ("signed", "已签约"),
];

#[derive(Default)]
struct LeadMetaState {
    loaded: bool,
    dirty: bool,
    loading: bool,
    status_options: Vec<DictOption>,
    source_options: Vec<DictOption>,
    level_options: Vec<DictOption>,
    tag_options: Vec<DictOption>,
    custom_fields: Vec<CustomField>,
}

/// Servicio de metadatos de leads
///
/// Construct one per app (or per test) and hand it to whoever renders
/// lead forms; all clones share the same cache.
#[derive(Clone)]
pub struct LeadMetaService {
    client: ApiClient,
    state: Rc<RefCell<LeadMetaState>>,
}

impl LeadMetaService {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            state: Rc::new(RefCell::new(LeadMetaState::default())),
        }
    }

    /// Load dictionary options and custom field definitions.
    ///
    /// A call while another load is in flight is a no-op; a call after a
    /// clean successful load is skipped unless `force` is set. All lists
    /// are populated before `loaded` flips true.
    pub async fn load(&self, force: bool) -> Result<(), ApiError> {
        {
            let state = self.state.borrow();
            if state.loading {
                return Ok(());
            }
            if state.loaded && !state.dirty && !force {
                return Ok(());
            }
        }
        self.state.borrow_mut().loading = true;
        log::info!("📚 Cargando metadatos del formulario de leads...");

        let result = futures::try_join!(
            get_dict_items(&self.client, "status"),
            get_dict_items(&self.client, "source"),
            get_dict_items(&self.client, "level"),
            get_dict_items(&self.client, "tag"),
            get_custom_fields(&self.client, "lead"),
        );

        let mut state = self.state.borrow_mut();
        state.loading = false;
        match result {
            Ok((status, source, level, tag, fields)) => {
                state.status_options = normalize_dict_options(status, FALLBACK_STATUS_OPTIONS);
                state.source_options = normalize_dict_options(source, FALLBACK_SOURCE_OPTIONS);
                state.level_options = normalize_dict_options(level, FALLBACK_LEVEL_OPTIONS);
                state.tag_options = normalize_dict_options(tag, FALLBACK_TAG_OPTIONS);
                state.custom_fields = normalize_custom_fields(fields.list);
                state.loaded = true;
                state.dirty = false;
                log::info!(
                    "✅ Metadatos cargados: {} campos personalizados",
                    state.custom_fields.len()
                );
                Ok(())
            }
            Err(error) => {
                log::error!("❌ Error cargando metadatos: {}", error);
                Err(error)
            }
        }
    }

    /// Fire-and-forget load for view code that cannot await
    #[cfg(target_arch = "wasm32")]
    pub fn prefetch(&self) {
        let service = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let _ = service.load(false).await;
        });
    }

    /// Mark the cache stale; the next `load` refetches everything
    pub fn invalidate(&self) {
        let mut state = self.state.borrow_mut();
        state.dirty = true;
        state.loaded = false;
    }

    pub fn loaded(&self) -> bool {
        self.state.borrow().loaded
    }

    pub fn loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn status_options(&self) -> Vec<DictOption> {
        self.state.borrow().status_options.clone()
    }

    pub fn source_options(&self) -> Vec<DictOption> {
        self.state.borrow().source_options.clone()
    }

    pub fn level_options(&self) -> Vec<DictOption> {
        self.state.borrow().level_options.clone()
    }

    pub fn tag_options(&self) -> Vec<DictOption> {
        self.state.borrow().tag_options.clone()
    }

    pub fn custom_fields(&self) -> Vec<CustomField> {
        self.state.borrow().custom_fields.clone()
    }

    /// Custom fields currently switched on
    pub fn active_custom_fields(&self) -> Vec<CustomField> {
        self.state
            .borrow()
            .custom_fields
            .iter()
            .filter(|field| field.active)
            .cloned()
            .collect()
    }

    /// Active fields that add new inputs (base-field overrides excluded)
    pub fn business_custom_fields(&self) -> Vec<CustomField> {
        self.active_custom_fields()
            .into_iter()
            .filter(|field| !BASE_LEAD_FIELD_CODES.contains(&field.code.as_str()))
            .collect()
    }

    /// Configuration override for a fixed base field, if the admin defined one
    pub fn base_field_config(&self, field_code: &str) -> Option<CustomField> {
        let code = resolve_field_code(field_code);
        self.state
            .borrow()
            .custom_fields
            .iter()
            .find(|field| field.code == code && BASE_LEAD_FIELD_CODES.contains(&field.code.as_str()))
            .cloned()
    }

    pub fn base_field_label(&self, field_code: &str, fallback_label: &str) -> String {
        match self.base_field_config(field_code) {
            Some(config) if !config.name.is_empty() => config.name,
            _ => fallback_label.to_string(),
        }
    }

    pub fn is_base_field_required(&self, field_code: &str, fallback_required: bool) -> bool {
        match self.base_field_config(field_code) {
            Some(config) => config.is_required,
            None => fallback_required,
        }
    }

    /// Options for a select-style field: the three fixed dictionaries, or a
    /// custom select field's own option list.
    pub fn field_options(&self, field_code: &str) -> Vec<DictOption> {
        let state = self.state.borrow();
        match field_code {
            "status" => state.status_options.clone(),
            "source" => state.source_options.clone(),
            "level" => state.level_options.clone(),
            _ => state
                .custom_fields
                .iter()
                .find(|field| field.code == field_code && field.kind == "select")
                .map(|field| field.field_options.clone())
                .unwrap_or_default(),
        }
    }

    /// Display label for a source value ("--" when empty)
    pub fn source_label(&self, source_value: &str) -> String {
        if source_value.is_empty() {
            return "--".to_string();
        }
        // legacy records carry a misspelled value
        let normalized = if source_value == "douying" {
            "douyin"
        } else {
            source_value
        };
        self.state
            .borrow()
            .source_options
            .iter()
            .find(|option| option.value == normalized)
            .map(|option| option.label.clone())
            .unwrap_or_else(|| source_value.to_string())
    }

    /// Map tag labels stored by older clients back to canonical values
    pub fn normalize_tag_values(&self, tag_values: &[String]) -> Vec<String> {
        let state = self.state.borrow();
        tag_values
            .iter()
            .map(|tag| {
                state
                    .tag_options
                    .iter()
                    .find(|option| option.label == *tag)
                    .map(|option| option.value.clone())
                    .unwrap_or_else(|| tag.clone())
            })
            .collect()
    }

    pub fn tag_label(&self, tag_value: &str) -> String {
        self.state
            .borrow()
            .tag_options
            .iter()
            .find(|option| option.value == tag_value)
            .map(|option| option.label.clone())
            .unwrap_or_else(|| tag_value.to_string())
    }
}

fn resolve_field_code(field_code: &str) -> &str {
    FIELD_CODE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == field_code)
        .map(|(_, code)| *code)
        .unwrap_or(field_code)
}

/// Dedup by value (first seen wins); empty labels fall back to the value;
/// an empty backend list falls back to the seed options.
fn normalize_dict_options(options: Vec<DictOption>, fallback: &[(&str, &str)]) -> Vec<DictOption> {
    let merged: Vec<DictOption> = if options.is_empty() {
        fallback
            .iter()
            .map(|(value, label)| DictOption::new(value, label))
            .collect()
    } else {
        options
    };

    let mut seen = std::collections::HashSet::new();
    let mut result = Vec::new();
    for option in merged {
        if option.value.is_empty() || !seen.insert(option.value.clone()) {
            continue;
        }
        let label = if option.label.is_empty() {
            option.value.clone()
        } else {
            option.label
        };
        result.push(DictOption {
            value: option.value,
            label,
        });
    }
    result
}

/// Normalize option lists per field and order by the admin-defined sort key
fn normalize_custom_fields(fields: Vec<CustomField>) -> Vec<CustomField> {
    let mut fields: Vec<CustomField> = fields
        .into_iter()
        .map(|mut field| {
            field.field_options = normalize_dict_options(field.field_options, &[]);
            field
        })
        .collect();
    fields.sort_by_key(|field| field.sort);
    fields
}
