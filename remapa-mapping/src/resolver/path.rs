//! 点/方括号路径解析：`shippings[0].method` ≡ `shippings.0.method`。
//! 任何一步未命中都归为 Null，绝不报错

use serde_json::Value;

/// 对 `root` 求 `path`；未命中返回 `Value::Null`（结果为克隆值）
pub fn lookup(root: &Value, path: &str) -> Value {
    if path.is_empty() {
        return Value::Null;
    }

    let normalized = normalize(path);
    let mut current = root;

    for segment in normalized.split('.') {
        // 连续分隔符产生的空段直接跳过
        if segment.is_empty() {
            continue;
        }
        let next = match current {
            Value::Object(map) => map.get(segment),
            Value::Array(arr) => segment.parse::<usize>().ok().and_then(|i| arr.get(i)),
            // 标量无法再下钻
            _ => None,
        };
        match next {
            Some(value) => current = value,
            None => return Value::Null,
        }
    }

    current.clone()
}

/// 归一化：`[N]`（N 为纯数字）改写成 `.N`；其余字符原样保留
fn normalize(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut rest = path;

    while let Some(open) = rest.find('[') {
        let (head, tail) = rest.split_at(open);
        out.push_str(head);

        let inner = &tail[1..];
        match inner.find(|c: char| !c.is_ascii_digit()) {
            Some(n) if n > 0 && inner.as_bytes()[n] == b']' => {
                out.push('.');
                out.push_str(&inner[..n]);
                rest = &inner[n + 1..];
            }
            // 不是 [数字] 的形式，保留 '[' 本身继续扫描
            _ => {
                out.push('[');
                rest = inner;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_brackets() {
        assert_eq!(normalize("a[0].b"), "a.0.b");
        assert_eq!(normalize("a[10][2]"), "a.10.2");
        // 非数字下标不改写
        assert_eq!(normalize("a[x].b"), "a[x].b");
        assert_eq!(normalize("a[]b"), "a[]b");
        assert_eq!(normalize("a[12"), "a[12");
    }

    #[test]
    fn test_lookup_nested() {
        let v = json!({ "a": { "b": 5 } });
        assert_eq!(lookup(&v, "a.b"), json!(5));
        assert_eq!(lookup(&v, "a"), json!({ "b": 5 }));
    }

    #[test]
    fn test_lookup_miss_is_null() {
        let v = json!({ "a": {} });
        assert_eq!(lookup(&v, "a.b"), Value::Null);

        // 标量上继续下钻也是 Null
        let v = json!({ "a": 5 });
        assert_eq!(lookup(&v, "a.b"), Value::Null);

        assert_eq!(lookup(&json!(null), "a"), Value::Null);
    }

    #[test]
    fn test_lookup_array_index() {
        let v = json!({ "a": [{ "x": 1 }, { "x": 2 }] });
        assert_eq!(lookup(&v, "a[0].x"), json!(1));
        assert_eq!(lookup(&v, "a.0.x"), json!(1));
        assert_eq!(lookup(&v, "a[1].x"), json!(2));
        assert_eq!(lookup(&v, "a[2].x"), Value::Null);
    }

    #[test]
    fn test_numeric_key_on_object() {
        // 数字段对「键恰好是数字串的对象」同样有效
        let v = json!({ "a": { "0": "zero" } });
        assert_eq!(lookup(&v, "a[0]"), json!("zero"));
        assert_eq!(lookup(&v, "a.0"), json!("zero"));
    }

    #[test]
    fn test_empty_segments_skipped() {
        let v = json!({ "a": { "b": 1 } });
        assert_eq!(lookup(&v, "a..b"), json!(1));
        assert_eq!(lookup(&v, ".a.b."), json!(1));
    }

    #[test]
    fn test_empty_path() {
        assert_eq!(lookup(&json!({ "a": 1 }), ""), Value::Null);
    }
}
