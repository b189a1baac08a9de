//! End-to-end scenarios driven entirely through `docidx_ast::mock`, one per
//! documented behavior of the pipeline — no real compiler involved.

use std::path::PathBuf;

use docidx_ast::decl::{
    BaseSpecifier, DeclSite, FunctionDecl, FunctionKind, NamespaceDecl, ParamDecl,
    RecordDecl, RecordKindDecl, RefQualifierDecl, TemplateParamDecl, TemplateParamDeclKind,
};
use docidx_ast::mock::{InMemoryCompileDatabase, MockFrontEnd};
use docidx_ast::type_node::{TagRef, TypeNode};
use docidx_ast::{CompileCommand, DeclNode, TranslationUnit};
use docidx_common::Access;
use docidx_common::Config;
use docidx_engine::Indexer;

fn config() -> Config {
    Config {
        compile_commands_json: PathBuf::from("compile_commands.json"),
        root_dir: PathBuf::from("/proj"),
        include_paths: vec![],
        ignore_paths: vec![],
        ignore_namespaces: vec![],
        ignore_private_members: false,
        debug_limit_num_indexed_files: None,
    }
}

fn site(usr: &str, file: &str, line: u32) -> DeclSite {
    DeclSite { usr: usr.to_string(), source_file: PathBuf::from(file), source_line: line, ..DeclSite::default() }
}

fn method(usr: &str, name: &str, file: &str) -> FunctionDecl {
    FunctionDecl {
        site: site(usr, file, 2),
        name: name.to_string(),
        kind: FunctionKind::Plain,
        is_template_instantiation: false,
        is_instantiated_member: false,
        primary_template_usr: None,
        is_deleted: false,
        is_deduction_guide: false,
        is_non_member_static: false,
        is_record_member: true,
        return_type: TypeNode::plain("void"),
        params: vec![],
        template_params: vec![],
        is_variadic: false,
        is_virtual: false,
        is_constexpr: false,
        is_consteval: false,
        is_inline: false,
        is_no_discard: false,
        is_no_except: false,
        is_no_return: false,
        is_const: false,
        is_volatile: false,
        is_restrict: false,
        is_explicit: false,
        ref_qualifier: RefQualifierDecl::None,
        storage_class: String::new(),
        has_trailing_return: false,
    }
}

fn record(usr: &str, name: &str, file: &str, children: Vec<DeclNode>) -> RecordDecl {
    RecordDecl {
        site: site(usr, file, 1),
        name: name.to_string(),
        typedef_for_anonymous: None,
        kind: RecordKindDecl::Class,
        is_definition: true,
        is_template_instantiation: false,
        primary_template_usr: None,
        specialization_args: vec![],
        is_specialization_without_written_type: false,
        template_params: vec![],
        bases: vec![],
        children,
    }
}

#[test]
fn s1_two_tus_see_the_same_header_class() {
    let cfg = config();
    let foo_h = "/proj/include/foo.h";

    let tu = TranslationUnit {
        primary_file: PathBuf::from(foo_h),
        top_level: vec![DeclNode::Record(record(
            "c:@S@Foo",
            "Foo",
            foo_h,
            vec![DeclNode::Function(method("c:@S@Foo@F@bar#", "bar", foo_h))],
        ))],
    };

    let front_end = MockFrontEnd::new().with_unit("a.cpp", tu.clone()).with_unit("b.cpp", tu);
    let compile_db = InMemoryCompileDatabase::new(vec![
        CompileCommand { directory: PathBuf::from("/proj"), file: PathBuf::from("a.cpp"), arguments: vec![] },
        CompileCommand { directory: PathBuf::from("/proj"), file: PathBuf::from("b.cpp"), arguments: vec![] },
    ]);

    let mut indexer = Indexer::new(&cfg, &front_end);
    let index = indexer.run(&compile_db).unwrap();

    assert_eq!(index.records.len(), 1);
    assert_eq!(index.functions.len(), 1);

    let foo_id = docidx_extract::canonical_symbol_id("c:@S@Foo", None);
    let foo = index.records.get(foo_id).unwrap();
    assert_eq!(foo.base.name, "Foo");
    assert_eq!(foo.method_ids.len(), 1);

    let bar_id = docidx_extract::canonical_symbol_id("c:@S@Foo@F@bar#", None);
    let bar = index.functions.get(bar_id).unwrap();
    assert_eq!(bar.base.name, "bar");
    assert!(bar.is_record_member);
    assert_eq!(foo.method_ids[0], bar_id);
}

#[test]
fn s2_template_specialization_collapses_onto_primary() {
    let cfg = config();
    let vec_h = "/proj/include/vec.h";

    let mut primary = record("c:@ST>1#T@Vec", "Vec", vec_h, vec![]);
    primary.template_params.push(TemplateParamDecl {
        kind: TemplateParamDeclKind::TypeParam,
        name: "T".to_string(),
        type_or_source_text: String::new(),
        default_value: String::new(),
        is_typename: true,
        is_parameter_pack: false,
    });

    let mut int_specialization = record("c:@ST>1#T@Vec>#I", "Vec", vec_h, vec![]);
    int_specialization.primary_template_usr = Some("c:@ST>1#T@Vec".to_string());
    int_specialization.specialization_args = vec!["int".to_string()];

    let tu = TranslationUnit {
        primary_file: PathBuf::from(vec_h),
        top_level: vec![DeclNode::Record(primary), DeclNode::Record(int_specialization)],
    };

    let front_end = MockFrontEnd::new().with_unit("a.cpp", tu);
    let compile_db = InMemoryCompileDatabase::new(vec![CompileCommand {
        directory: PathBuf::from("/proj"),
        file: PathBuf::from("a.cpp"),
        arguments: vec![],
    }]);

    let mut indexer = Indexer::new(&cfg, &front_end);
    let index = indexer.run(&compile_db).unwrap();

    assert_eq!(index.records.len(), 1);
    let vec_id = docidx_extract::canonical_symbol_id("c:@ST>1#T@Vec", None);
    let vec_symbol = index.records.get(vec_id).unwrap();
    assert_eq!(vec_symbol.base.name, "Vec");
    assert_eq!(vec_symbol.template_params.len(), 1);
    assert_eq!(vec_symbol.template_params[0].name, "T");
}

#[test]
fn s3_ignored_path_is_excluded_but_sibling_is_kept() {
    let mut cfg = config();
    cfg.ignore_paths = vec!["third_party/".to_string()];

    let tu = TranslationUnit {
        primary_file: PathBuf::from("a.cpp"),
        top_level: vec![
            DeclNode::Record(record("c:@S@Vendored", "Vendored", "/proj/third_party/foo.h", vec![])),
            DeclNode::Record(record("c:@S@Bar", "Bar", "/proj/src/bar.h", vec![])),
        ],
    };

    let front_end = MockFrontEnd::new().with_unit("a.cpp", tu);
    let compile_db = InMemoryCompileDatabase::new(vec![CompileCommand {
        directory: PathBuf::from("/proj"),
        file: PathBuf::from("a.cpp"),
        arguments: vec![],
    }]);

    let mut indexer = Indexer::new(&cfg, &front_end);
    let index = indexer.run(&compile_db).unwrap();

    assert_eq!(index.records.len(), 1);
    let bar_id = docidx_extract::canonical_symbol_id("c:@S@Bar", None);
    assert!(index.records.contains(bar_id));
}

#[test]
fn s4_method_of_filtered_record_is_pruned() {
    let mut cfg = config();
    cfg.ignore_namespaces = vec!["detail".to_string()];

    let foo_file = "/proj/src/foo.h";
    let foo = record(
        "c:@N@ns@N@detail@S@Foo",
        "Foo",
        foo_file,
        vec![DeclNode::Function(method("c:@N@ns@N@detail@S@Foo@F@baz#", "baz", foo_file))],
    );
    let detail_ns = NamespaceDecl { site: site("c:@N@ns@N@detail", foo_file, 1), name: "detail".to_string(), children: vec![DeclNode::Record(foo)] };
    let outer_ns = NamespaceDecl { site: site("c:@N@ns", foo_file, 1), name: "ns".to_string(), children: vec![DeclNode::Namespace(detail_ns)] };

    let tu = TranslationUnit { primary_file: PathBuf::from(foo_file), top_level: vec![DeclNode::Namespace(outer_ns)] };
    let front_end = MockFrontEnd::new().with_unit("a.cpp", tu);
    let compile_db = InMemoryCompileDatabase::new(vec![CompileCommand {
        directory: PathBuf::from("/proj"),
        file: PathBuf::from("a.cpp"),
        arguments: vec![],
    }]);

    let mut indexer = Indexer::new(&cfg, &front_end);
    let index = indexer.run(&compile_db).unwrap();

    assert_eq!(index.records.len(), 0);
    assert_eq!(index.functions.len(), 0);
}

#[test]
fn s5_inheritance_proto_lists_explicit_access() {
    let cfg = config();
    let file = "/proj/src/shapes.h";

    let b = record("c:@S@B", "B", file, vec![]);
    let c = record("c:@S@C", "C", file, vec![]);
    let mut d = record("c:@S@D", "D", file, vec![]);
    d.bases = vec![
        BaseSpecifier {
            r#type: TypeNode::tagged("B", TagRef { usr: "c:@S@B".to_string(), primary_template_usr: None }),
            access: Access::Public,
            access_written: true,
            is_std_namespace: false,
        },
        BaseSpecifier {
            r#type: TypeNode::tagged("C", TagRef { usr: "c:@S@C".to_string(), primary_template_usr: None }),
            access: Access::Private,
            access_written: true,
            is_std_namespace: false,
        },
    ];

    let tu = TranslationUnit {
        primary_file: PathBuf::from(file),
        top_level: vec![DeclNode::Record(b), DeclNode::Record(c), DeclNode::Record(d)],
    };
    let front_end = MockFrontEnd::new().with_unit("a.cpp", tu);
    let compile_db = InMemoryCompileDatabase::new(vec![CompileCommand {
        directory: PathBuf::from("/proj"),
        file: PathBuf::from("a.cpp"),
        arguments: vec![],
    }]);

    let mut indexer = Indexer::new(&cfg, &front_end);
    let index = indexer.run(&compile_db).unwrap();

    let d_id = docidx_extract::canonical_symbol_id("c:@S@D", None);
    let d = index.records.get(d_id).unwrap();
    assert!(d.proto.ends_with(" : public B, private C"));
}

#[test]
fn s6_member_function_template_parameter_is_restored() {
    let cfg = config();
    let file = "/proj/src/s.h";

    let mut s = record("c:@S@S", "S", file, vec![]);
    s.template_params.push(TemplateParamDecl {
        kind: TemplateParamDeclKind::TypeParam,
        name: "T".to_string(),
        type_or_source_text: String::new(),
        default_value: String::new(),
        is_typename: true,
        is_parameter_pack: false,
    });

    let mut f = method("c:@S@S@F@f#", "f", file);
    f.params.push(ParamDecl {
        name: "x".to_string(),
        r#type: TypeNode::plain("type-parameter-0-0"),
        default_value_uninstantiated: None,
        default_value_instantiated: None,
    });
    s.children.push(DeclNode::Function(f));

    let tu = TranslationUnit { primary_file: PathBuf::from(file), top_level: vec![DeclNode::Record(s)] };
    let front_end = MockFrontEnd::new().with_unit("a.cpp", tu);
    let compile_db = InMemoryCompileDatabase::new(vec![CompileCommand {
        directory: PathBuf::from("/proj"),
        file: PathBuf::from("a.cpp"),
        arguments: vec![],
    }]);

    let mut indexer = Indexer::new(&cfg, &front_end);
    let index = indexer.run(&compile_db).unwrap();

    let f_id = docidx_extract::canonical_symbol_id("c:@S@S@F@f#", None);
    let f = index.functions.get(f_id).unwrap();
    assert!(f.proto.contains("T x"));
    assert!(!f.proto.contains("type-parameter"));
    assert!(f.post_template <= f.name_start);
    assert!(f.name_start <= f.proto.len());
    assert_eq!(&f.proto[f.name_start..f.name_start + f.base.name.len()], f.base.name.as_str());
}
