#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::str_to_string,
    clippy::missing_docs_in_private_items,
    missing_docs
)]

//! TypeScript handling: extraction of annotated/generic heads and
//! normalization equivalence between TS and JS spellings.

use jsdupes::dupes::{locate_and_extract_units, normalize, similarity};
use rustc_hash::FxHashSet;
use std::path::PathBuf;

fn extract(source: &str, file: &str) -> Vec<jsdupes::dupes::ExtractedUnit> {
    locate_and_extract_units(source, &PathBuf::from(file))
}

fn text_similarity(a: &str, b: &str) -> f64 {
    similarity(a, b, &FxHashSet::default(), &FxHashSet::default())
}

#[test]
fn test_extract_function_with_parameter_annotations() {
    let code = "function greet(name: string): string {\n  return \"Hello, \" + name;\n}\n";
    let units = extract(code, "test.ts");
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].name, "greet");
}

#[test]
fn test_extract_arrow_with_annotations() {
    let code = "const add = (a: number, b: number): number => {\n  return a + b;\n};\n";
    let units = extract(code, "test.ts");
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].name, "add");
}

#[test]
fn test_parameter_annotations_normalize_away() {
    let ts = normalize("function add(a: number, b: number) { return a + b; }");
    let js = normalize("function add(a, b) { return a + b; }");
    assert_eq!(ts, js);
}

#[test]
fn test_return_type_annotations_normalize_away() {
    let ts = normalize("function getData(): Promise<User> { return fetch(); }");
    let js = normalize("function getData() { return fetch(); }");
    let score = text_similarity(&ts, &js);
    assert!(score > 80.0, "similarity should be > 80, got {score}");
}

#[test]
fn test_extract_generic_function() {
    let code = "function identity<T>(arg: T): T {\n  return arg;\n}\n";
    let units = extract(code, "test.ts");
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].name, "identity");
}

#[test]
fn test_generic_parameters_normalize_close_to_js() {
    let ts = normalize("function map<T, U>(arr: T[], fn: (x: T) => U): U[] { return arr.map(fn); }");
    let js = normalize("function map(arr, fn) { return arr.map(fn); }");
    let score = text_similarity(&ts, &js);
    assert!(score > 65.0, "similarity should be > 65, got {score}");
}

#[test]
fn test_extract_constrained_generic() {
    let code = "function extend<T extends object>(obj: T, props: Partial<T>): T {\n  return { ...obj, ...props };\n}\n";
    let units = extract(code, "test.ts");
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].name, "extend");
}

#[test]
fn test_extract_class_methods_with_access_modifiers() {
    let code = "class Calculator {\n  public add(a: number, b: number): number {\n    return a + b;\n  }\n\n  private multiply(x: number, y: number): number {\n    return x * y;\n  }\n\n  protected divide(a: number, b: number): number {\n    return a / b;\n  }\n}\n";
    let units = extract(code, "test.ts");
    assert_eq!(units.len(), 3);
    assert!(units.iter().any(|u| u.name == "add"));
    assert!(units.iter().any(|u| u.name == "multiply"));
    assert!(units.iter().any(|u| u.name == "divide"));
}

#[test]
fn test_access_modifiers_normalize_close_to_js() {
    let ts = normalize("public add(a: number, b: number): number { return a + b; }");
    let js = normalize("add(a, b) { return a + b; }");
    let score = text_similarity(&ts, &js);
    assert!(score > 75.0, "similarity should be > 75, got {score}");
}

#[test]
fn test_extract_static_method() {
    let code = "class MathUtils {\n  static sum(a: number, b: number): number {\n    return a + b;\n  }\n}\n";
    let units = extract(code, "test.ts");
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].name, "sum");
}

#[test]
fn test_extract_optional_parameters() {
    let code = "function buildName(first: string, last?: string): string {\n  return last ? first + \" \" + last : first;\n}\n";
    let units = extract(code, "test.ts");
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].name, "buildName");
}

#[test]
fn test_optional_parameters_normalize_close_to_js() {
    let ts = normalize("function greet(name: string, age?: number) { return name; }");
    let js = normalize("function greet(name, age) { return name; }");
    let score = text_similarity(&ts, &js);
    assert!(score > 90.0, "similarity should be > 90, got {score}");
}

#[test]
fn test_type_assertions_normalize_close_to_js() {
    let ts = normalize("const name = (user as User).name;");
    let js = normalize("const name = user.name;");
    let score = text_similarity(&ts, &js);
    assert!(score > 70.0, "similarity should be > 70, got {score}");
}

#[test]
fn test_cross_language_duplicate_detection() {
    let ts = "function calculateSum(a: number, b: number): number {\n  const result = a + b;\n  return result;\n}\n";
    let js = "function addNumbers(x, y) {\n  const total = x + y;\n  return total;\n}\n";

    let ts_units = extract(ts, "math.ts");
    let js_units = extract(js, "math.js");
    assert_eq!(ts_units.len(), 1);
    assert_eq!(js_units.len(), 1);

    let score = text_similarity(&ts_units[0].normalized_body, &js_units[0].normalized_body);
    assert!(score > 90.0, "TS and JS bodies should be similar, got {score}");
}

#[test]
fn test_extract_union_type_parameter() {
    let code = "function process(value: string | number): string {\n  return value.toString();\n}\n";
    let units = extract(code, "test.ts");
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].name, "process");
}

#[test]
fn test_extract_array_type_parameter() {
    let code = "function sum(numbers: number[]): number {\n  return numbers.reduce((a, b) => a + b, 0);\n}\n";
    let units = extract(code, "test.ts");
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].name, "sum");
}

#[test]
fn test_extract_async_function_with_promise_return() {
    let code = "async function fetchData(id: string): Promise<User> {\n  const response = await fetch('/api/' + id);\n  return response.json();\n}\n";
    let units = extract(code, "test.ts");
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].name, "fetchData");
}

#[test]
fn test_extract_complex_arrow_annotations() {
    let code = "const processUser = async (user: User, options?: ProcessOptions): Promise<Result> => {\n  const data = await validateUser(user);\n  return processData(data, options);\n};\n";
    let units = extract(code, "test.ts");
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].name, "processUser");
}

#[test]
fn test_extract_readonly_parameter() {
    let code = "function getFirst(arr: readonly number[]): number {\n  return arr[0];\n}\n";
    let units = extract(code, "test.ts");
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].name, "getFirst");
}

#[test]
fn test_extract_tuple_types() {
    let code = "function swap(pair: [number, number]): [number, number] {\n  return [pair[1], pair[0]];\n}\n";
    let units = extract(code, "test.ts");
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].name, "swap");
}

#[test]
fn test_extract_function_type_parameter() {
    let code = "function execute(callback: (x: number) => string): string {\n  return callback(42);\n}\n";
    let units = extract(code, "test.ts");
    assert_eq!(units.len(), 1);
    assert_eq!(units[0].name, "execute");
}

#[test]
fn test_real_world_ts_js_duplicate() {
    let ts = "export async function getUserById(id: string): Promise<User | null> {\n  try {\n    const response = await fetch(`/api/users/${id}`);\n    const data = await response.json();\n    return data;\n  } catch (error) {\n    console.error('Error fetching user:', error);\n    return null;\n  }\n}\n";
    let js = "export async function fetchUser(userId) {\n  try {\n    const result = await fetch(`/api/users/${userId}`);\n    const json = await result.json();\n    return json;\n  } catch (err) {\n    console.error('Error fetching user:', err);\n    return null;\n  }\n}\n";

    let ts_units = extract(ts, "userService.ts");
    let js_units = extract(js, "userService.js");
    assert_eq!(ts_units.len(), 1);
    assert_eq!(js_units.len(), 1);

    let score = text_similarity(&ts_units[0].normalized_body, &js_units[0].normalized_body);
    assert!(score > 70.0, "real-world TS/JS bodies should be similar, got {score}");
}

#[test]
fn test_extract_exported_class_methods() {
    let code = "export class DataService {\n  public get(id: string): string {\n    return id;\n  }\n\n  private fetchFromAPI(id: string): string {\n    return id;\n  }\n}\n";
    let units = extract(code, "dataService.ts");
    assert!(units.iter().any(|u| u.name == "get"));
    assert!(units.iter().any(|u| u.name == "fetchFromAPI"));
}
