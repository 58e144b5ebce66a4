// ============================================================================
// CITY NORMALIZATION - major-city list for the lead city field
// ============================================================================

/// Candidate value for a city autocomplete input
#[derive(Debug, Clone, PartialEq)]
pub struct CitySuggestion {
    pub value: String,
}

const CITY_LIST: &[&str] = &[
    "北京", "上海", "广州", "深圳", "天津", "重庆", "成都", "杭州", "南京", "武汉",
    "西安", "苏州", "郑州", "长沙", "青岛", "宁波", "东莞", "佛山", "合肥", "福州",
    "厦门", "济南", "沈阳", "大连", "昆明", "南宁", "南昌", "贵阳", "太原", "石家庄",
    "哈尔滨", "长春", "兰州", "乌鲁木齐", "呼和浩特", "海口", "三亚", "珠海", "无锡", "常州",
    "嘉兴", "金华", "绍兴", "温州", "台州", "湖州", "扬州", "徐州", "南通", "盐城",
    "烟台", "潍坊", "临沂", "洛阳", "开封", "泉州", "漳州", "惠州", "中山", "汕头",
];

const MAX_SUGGESTIONS: usize = 20;

/// Trim whitespace and a trailing "市" suffix
fn normalize_token(value: &str) -> &str {
    value.trim().trim_end_matches('市')
}

/// Normalize a free-form city input against the known city list.
///
/// Exact match wins, then a fuzzy prefix match either way ("北京朝阳" → "北京").
/// Unknown input is returned unchanged.
pub fn normalize_city_input(value: &str) -> String {
    let token = normalize_token(value);
    if token.is_empty() {
        return String::new();
    }
    if let Some(exact) = CITY_LIST.iter().find(|item| **item == token) {
        return (*exact).to_string();
    }
    let fuzzy = CITY_LIST
        .iter()
        .find(|item| item.starts_with(token) || token.starts_with(**item));
    match fuzzy {
        Some(city) => (*city).to_string(),
        None => token.to_string(),
    }
}

/// Autocomplete suggestions for a partial city input (top 20)
pub fn query_city_suggestions(query: &str) -> Vec<CitySuggestion> {
    let token = normalize_token(query);
    if token.is_empty() {
        return CITY_LIST
            .iter()
            .take(MAX_SUGGESTIONS)
            .map(|item| CitySuggestion {
                value: (*item).to_string(),
            })
            .collect();
    }
    CITY_LIST
        .iter()
        .filter(|item| item.contains(token) || item.starts_with(token))
        .take(MAX_SUGGESTIONS)
        .map(|item| CitySuggestion {
            value: (*item).to_string(),
        })
        .collect()
}
