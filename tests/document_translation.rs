//! 文档翻译集成测试
//!
//! 覆盖HTML路径：结构保持、文本节点替换、输出归一化、
//! 残缺标记容错和提供方故障下的内容降级

mod common;

use common::{service_with, test_config, StubProvider};

/// 端到端结构保持：嵌套不变、内文已翻译、引号和闭合缝隙已归一化
#[tokio::test]
async fn test_document_structure_preserved_end_to_end() {
    let (provider, service) = service_with(
        StubProvider::with_mapping(&[
            ("Willkommen", "Welcome"),
            ("Dies ist ein Text.", "This is a text."),
        ]),
        test_config(),
    );

    let html = "<div><h1>Willkommen</h1><p>Dies ist ein Text.</p></div>";
    let result = service.translate_document(html, "EN-US").await;

    // 嵌套结构与文档顺序保持不变，内文换成译文
    assert!(
        result.contains("<div><h1>Welcome</h1><p>This is a text.</p></div>"),
        "unexpected output: {}",
        result
    );
    // 归一化规则：无双引号、无闭合前缝隙
    assert!(!result.contains('"'));
    assert!(!result.contains(" >"));
    assert!(!result.contains(" </"));
    assert_eq!(provider.calls(), 2);
}

/// 序列化属性统一使用单引号，属性值本身不被翻译
#[tokio::test]
async fn test_attributes_use_single_quotes_and_stay_untranslated() {
    let (provider, service) = service_with(StubProvider::new(), test_config());

    let html = "<div class=\"note\" id=\"kopf\"><p>Hallo</p></div>";
    let result = service.translate_document(html, "EN-US").await;

    assert!(result.contains("class='note'"));
    assert!(result.contains("id='kopf'"));
    assert!(result.contains("<p>T:Hallo</p>"));
    // 只有一个文本节点被送去翻译
    assert_eq!(provider.calls(), 1);
}

/// 残缺标记不会让解析或翻译失败
#[tokio::test]
async fn test_malformed_markup_is_tolerated() {
    let (_, service) = service_with(StubProvider::new(), test_config());

    let html = "<div><p>Offener Absatz <b>fett";
    let result = service.translate_document(html, "EN-US").await;

    assert!(result.contains("T:Offener Absatz"));
    assert!(result.contains("T:fett"));
}

/// script/style 子树不进入工作列表，内容原样保留
#[tokio::test]
async fn test_script_and_style_content_is_not_translated() {
    let (provider, service) = service_with(StubProvider::new(), test_config());

    let html = "<p>Hallo</p><script>var x = \"eins\";</script><style>p { color: red; }</style>";
    let result = service.translate_document(html, "EN-US").await;

    // 只有 <p> 的文本被派发
    assert_eq!(provider.calls(), 1);
    assert!(result.contains("<p>T:Hallo</p>"));
    // 脚本内容未翻译；双引号归一化作为外观规则仍然生效
    assert!(result.contains("var x = 'eins';"));
    assert!(result.contains("p { color: red; }"));
}

/// 提供方持续失败：文档内容逐节点降级为原文，结构照常保持
#[tokio::test]
async fn test_document_degrades_to_original_on_provider_failure() {
    let (provider, service) = service_with(StubProvider::failing(), test_config());

    let html = "<div><h1>Willkommen</h1><p>Guten Tag</p></div>";
    let result = service.translate_document(html, "EN-US").await;

    assert!(result.contains("<div><h1>Willkommen</h1><p>Guten Tag</p></div>"));
    // 2个节点 × 3次尝试
    assert_eq!(provider.calls(), 6);
}

/// 标签之间的纯空白节点不触发任何调用
#[tokio::test]
async fn test_formatting_whitespace_triggers_no_calls() {
    let (provider, service) = service_with(StubProvider::new(), test_config());

    let html = "<div>\n    <p>Text</p>\n    </div>";
    let result = service.translate_document(html, "EN-US").await;

    assert_eq!(provider.calls(), 1);
    assert!(result.contains("<p>T:Text</p>"));
}

/// 没有可翻译内容的文档原样序列化（含归一化），零次调用
#[tokio::test]
async fn test_document_without_text_nodes() {
    let (provider, service) = service_with(StubProvider::new(), test_config());

    let result = service.translate_document("<div><br><hr></div>", "EN-US").await;

    assert!(result.contains("<div><br><hr></div>"));
    assert_eq!(provider.calls(), 0);
}

/// 同步文档包装在非异步环境中可用
#[test]
fn test_document_sync_wrapper() {
    let (_, service) = service_with(
        StubProvider::with_mapping(&[("Hallo", "Hello")]),
        test_config(),
    );

    let result = service
        .translate_document_sync("<p>Hallo</p>", "EN-US")
        .unwrap();

    assert!(result.contains("<p>Hello</p>"));
}
