//! Template registry for generated benchmark units.
//!
//! One template constant and one generation function per supported
//! (framework, shape) pair. Each template carries a `{{UID}}` placeholder in
//! every symbol the unit introduces; rendering substitutes the caller's uid
//! and nothing else, so collision-freedom across emissions is a property of
//! the templates rather than an accident of formatting.
//!
//! Generation is pure text production: no filesystem access, no validation
//! of the emitted C++. Helper types (argument structs, fixtures, generators)
//! live in anonymous namespaces so units with distinct uids can be compiled
//! together.

use crate::types::{CodegenError, Framework, Shape};

const SLTBENCH_TMPL_SIMPLE: &str = r#"
#include <sltbench/Bench.h>
#include <string>

static void simple_{{UID}}()
{
    std::string rv;
    for (size_t i = 0; i < 100000; ++i)
        rv += "simple function";
}
SLTBENCH_FUNCTION(simple_{{UID}});
"#;

const SLTBENCH_TMPL_ARGS: &str = r#"
#include <sltbench/Bench.h>
#include <ostream>
#include <string>

namespace {

struct Arg
{
    size_t n;
    std::string src;
};

std::ostream& operator << (std::ostream& oss, const Arg& rhs)
{
    return oss << rhs.n << '/' << rhs.src;
}

void func_args_{{UID}}(const Arg& arg)
{
    std::string rv;
    for (size_t i = 0; i < arg.n; ++i)
        rv += arg.src;
}

const std::vector<Arg> string_mult_args{ {1, "a"}, {2, "b"} };
SLTBENCH_FUNCTION_WITH_ARGS(func_args_{{UID}}, string_mult_args);
}
"#;

const SLTBENCH_TMPL_FIXTURE: &str = r#"
#include <sltbench/Bench.h>
#include <algorithm>
#include <vector>

namespace {

class Fixture
{
public:
    typedef std::vector<size_t> Type;
    Fixture() {}
    Type& SetUp() { return fixture_; }
    void TearDown() {}
private:
    Type fixture_;
};

void func_{{UID}}(Fixture::Type& fix)
{
    std::sort(fix.begin(), fix.end());
}
SLTBENCH_FUNCTION_WITH_FIXTURE(func_{{UID}}, Fixture);
}
"#;

const SLTBENCH_TMPL_GENERATOR: &str = r#"
#include <sltbench/Bench.h>
#include <algorithm>
#include <ostream>
#include <string>
#include <vector>

namespace {

class Generator
{
public:
    struct ArgType
    {
        std::string src;
        size_t n;
    };

    Generator() {}

    std::vector<ArgType> Generate(int argc, char **argv)
    {
        return{ {"a", 1}, {"b", 2} };
    }
};

std::ostream& operator << (std::ostream& os, const Generator::ArgType& rhs)
{
    return os << rhs.n << '/' << rhs.src;
}

void func_gen_{{UID}}(const Generator::ArgType& arg)
{
    std::string rv;
    for (size_t i = 0; i < arg.n; ++i)
        rv += arg.src;
}
SLTBENCH_FUNCTION_WITH_ARGS_GENERATOR(func_gen_{{UID}}, Generator);
}
"#;

const SLTBENCH_TMPL_LAZY_GENERATOR: &str = r#"
#include <sltbench/Bench.h>
#include <algorithm>
#include <ostream>
#include <vector>

namespace {

class Generator
{
public:
    struct ArgType
    {
        size_t size;
        size_t ncalls;
    };

    Generator(int, char **) {}

    ArgType Generate()
    {
        if (generated_count_ >= 3)
            throw sltbench::StopGenerationException();

        ++generated_count_;

        // the only instance of ArgType is in the memory during measurement
        return{ generated_count_ * 100000, generated_count_ };
    }

private:
    size_t generated_count_ = 0;
};

std::ostream& operator << (std::ostream& os, const Generator::ArgType& rhs)
{
    return os << rhs.size << '/' << rhs.ncalls;
}

void func_lazygen_{{UID}}(const Generator::ArgType& arg)
{
    // let's propose we are going to do something useful computations here
    std::vector<size_t> vec(arg.size, 0);
    for (size_t i = 0; i < arg.ncalls; ++i)
        std::random_shuffle(vec.begin(), vec.end());
}
SLTBENCH_FUNCTION_WITH_LAZY_ARGS_GENERATOR(func_lazygen_{{UID}}, Generator);
}
"#;

const SLTBENCH_TMPL_FIXTURE_ARGS: &str = r#"
#include <sltbench/Bench.h>
#include <algorithm>
#include <ostream>
#include <vector>

namespace {

struct Arg
{
    size_t size;
    size_t ncalls;
};

std::ostream& operator << (std::ostream& oss, const Arg& arg)
{
    return oss << arg.size << '/' << arg.ncalls;
}

class Fixture
{
public:
    typedef std::vector<size_t> Type;
    Fixture() {}
    Type& SetUp(const Arg& arg) { return fixture_; }
    void TearDown() {}
private:
    Type fixture_;
};

void func_fixargs_{{UID}}(Fixture::Type& fix, const Arg& arg)
{
}
static const std::vector<Arg> args = { { 100000, 1 } };
SLTBENCH_FUNCTION_WITH_FIXTURE_AND_ARGS(func_fixargs_{{UID}}, Fixture, args);
}
"#;

const SLTBENCH_TMPL_FIXTURE_GENERATOR: &str = r#"
#include <sltbench/Bench.h>
#include <algorithm>
#include <ostream>
#include <vector>

namespace {

class Generator
{
public:
    struct ArgType
    {
        size_t size;
        size_t ncalls;
    };

    Generator() {}

    std::vector<ArgType> Generate(int argc, char **argv)
    {
        return{ {100000, 10}, {200000, 20} };
    }
};

std::ostream& operator << (std::ostream& os, const Generator::ArgType& rhs)
{
    return os << rhs.ncalls << '/' << rhs.size;
}

class Fixture
{
public:
    typedef std::vector<size_t> Type;
    Fixture() {}
    Type& SetUp(const Generator::ArgType& arg) { return fixture_; }
    void TearDown() {}
private:
    Type fixture_;
};

void func_fixgen_{{UID}}(Fixture::Type& fix, const Generator::ArgType& arg)
{
    // some useful work here based on fixture and arg
    for (size_t i = 0; i < arg.ncalls; ++i)
        std::random_shuffle(fix.begin(), fix.end());
}
SLTBENCH_FUNCTION_WITH_FIXTURE_AND_ARGS_GENERATOR(func_fixgen_{{UID}}, Fixture, Generator);
}
"#;

const SLTBENCH_TMPL_FIXTURE_LAZY_GENERATOR: &str = r#"
#include <sltbench/Bench.h>
#include <algorithm>
#include <ostream>
#include <vector>

namespace {

class Generator
{
public:
    struct ArgType
    {
        size_t size;
        size_t ncalls;
    };

    Generator(int, char **) {}

    ArgType Generate()
    {
        if (generated_count_ >= 3)
            throw sltbench::StopGenerationException();

        ++generated_count_;

        // the only instance of ArgType is in the memory during measurement
        return{generated_count_ * 100000, generated_count_};
    }

private:
    size_t generated_count_ = 0;
};

std::ostream& operator << (std::ostream& os, const Generator::ArgType& rhs)
{
    return os << rhs.size << '/' << rhs.ncalls;
}

class Fixture
{
public:
    typedef std::vector<size_t> Type;
    Fixture() {}
    Type& SetUp(const Generator::ArgType& arg) { return fixture_; }
    void TearDown() {}
private:
    Type fixture_;
};

void func_fix_lazygen_{{UID}}(Fixture::Type& fix, const Generator::ArgType& arg)
{
    // some useful work here based on fixture and arg
    for (size_t i = 0; i < arg.ncalls; ++i)
        std::random_shuffle(fix.begin(), fix.end());
}
SLTBENCH_FUNCTION_WITH_FIXTURE_AND_LAZY_ARGS_GENERATOR(func_fix_lazygen_{{UID}}, Fixture, Generator);
}
"#;

const SLTBENCH_TMPL_FIXTURE_BUILDER: &str = r#"
#include <sltbench/Bench.h>
#include <algorithm>
#include <vector>

namespace {

std::vector<size_t> make_fixture()
{
    return { };
}

void func_fb_{{UID}}(std::vector<size_t>& fix)
{
    std::sort(fix.begin(), fix.end());
}
SLTBENCH_FUNCTION_WITH_FIXTURE_BUILDER(func_fb_{{UID}}, make_fixture);
}
"#;

const SLTBENCH_TMPL_FIXTURE_BUILDER_ARGS: &str = r#"
#include <sltbench/Bench.h>
#include <algorithm>
#include <ostream>
#include <vector>

namespace {

struct Arg
{
    size_t size;
    size_t ncalls;
};

std::ostream& operator << (std::ostream& oss, const Arg& arg)
{
    return oss << arg.size << '/' << arg.ncalls;
}

std::vector<size_t> make_fixture(const Arg&)
{
    return { };
}

void func_fb_a_{{UID}}(std::vector<size_t>&, const Arg&)
{
}
static const std::vector<Arg> args = { { 100000, 1 } };
SLTBENCH_FUNCTION_WITH_FIXTURE_BUILDER_AND_ARGS(func_fb_a_{{UID}}, make_fixture, args);
}
"#;

const SLTBENCH_TMPL_FIXTURE_BUILDER_GENERATOR: &str = r#"
#include <sltbench/Bench.h>
#include <algorithm>
#include <ostream>
#include <vector>

namespace {

class Generator
{
public:
    struct ArgType
    {
        size_t size;
        size_t ncalls;
    };

    Generator() {}

    std::vector<ArgType> Generate(int argc, char **argv)
    {
        return{ {100000, 10}, {200000, 20} };
    }
};

std::ostream& operator << (std::ostream& os, const Generator::ArgType& rhs)
{
    return os << rhs.ncalls << '/' << rhs.size;
}

std::vector<size_t> make_fixture(const Generator::ArgType&)
{
    return { };
}

void func_fb_g_{{UID}}(std::vector<size_t>& fix, const Generator::ArgType& arg)
{
    // some useful work here based on fixture and arg
    for (size_t i = 0; i < arg.ncalls; ++i)
        std::random_shuffle(fix.begin(), fix.end());
}
SLTBENCH_FUNCTION_WITH_FIXTURE_BUILDER_AND_ARGS_GENERATOR(func_fb_g_{{UID}}, make_fixture, Generator);
}
"#;

const SLTBENCH_TMPL_FIXTURE_BUILDER_LAZY_GENERATOR: &str = r#"
#include <sltbench/Bench.h>
#include <algorithm>
#include <ostream>
#include <vector>

namespace {

class Generator
{
public:
    struct ArgType
    {
        size_t size;
        size_t ncalls;
    };

    Generator(int, char **) {}

    ArgType Generate()
    {
        if (generated_count_ >= 3)
            throw sltbench::StopGenerationException();

        ++generated_count_;

        // the only instance of ArgType is in the memory during measurement
        return{generated_count_ * 100000, generated_count_};
    }

private:
    size_t generated_count_ = 0;
};

std::ostream& operator << (std::ostream& os, const Generator::ArgType& rhs)
{
    return os << rhs.size << '/' << rhs.ncalls;
}

std::vector<size_t> make_fixture(const Generator::ArgType&)
{
    return { };
}

void func_fb_lag_{{UID}}(std::vector<size_t>& fix, const Generator::ArgType& arg)
{
    // some useful work here based on fixture and arg
    for (size_t i = 0; i < arg.ncalls; ++i)
        std::random_shuffle(fix.begin(), fix.end());
}
SLTBENCH_FUNCTION_WITH_FIXTURE_BUILDER_AND_LAZY_ARGS_GENERATOR(func_fb_lag_{{UID}}, make_fixture, Generator);
}
"#;

const GOOGLEBENCH_TMPL_SIMPLE: &str = r#"
#include <benchmark/benchmark.h>

#include <string>

static void simple_{{UID}}(benchmark::State& state)
{
    std::string x = "hello";
    while (state.KeepRunning())
    {
        std::string rv;
        for (size_t i = 0; i < 100000; ++i)
            rv += "simple function";
    }
}
BENCHMARK(simple_{{UID}});
"#;

const GOOGLEBENCH_TMPL_FIXTURE: &str = r#"
#include <benchmark/benchmark.h>

#include <algorithm>
#include <vector>

static void func_fix_{{UID}}(benchmark::State& state)
{
    std::vector<size_t> v;
    while (state.KeepRunning())
    {
        state.PauseTiming();
        v.resize(1000, 0);
        state.ResumeTiming();

        std::sort(v.begin(), v.end());
    }
}
BENCHMARK(func_fix_{{UID}});
"#;

const NONIUS_TMPL_SIMPLE: &str = r#"
#include <nonius/nonius.h++>

#include <string>

static void simple_{{UID}}()
{
    std::string rv;
    for (size_t i = 0; i < 100000; ++i)
        rv += "simple function";
}

NONIUS_BENCHMARK("simple_{{UID}}", [](){ simple_{{UID}}(); })
"#;

/// Placeholder substituted into every symbol a template introduces.
const UID_PLACEHOLDER: &str = "{{UID}}";

fn render_uid(template: &str, uid: &str) -> String {
    template.replace(UID_PLACEHOLDER, uid)
}

/// Generates one benchmark unit for the given (framework, shape) pair.
///
/// Returns the complete source text of a self-contained compilation unit with
/// `uid` interpolated into every symbol name the shape introduces. Two
/// emissions with distinct uids may be compiled together without clashes.
///
/// # Errors
///
/// Returns [`CodegenError::UnsupportedCombination`] when the framework cannot
/// express the shape (see [`Framework::supported_shapes`]).
///
/// # Example
///
/// ```
/// use benchgen_sdk::{Framework, Shape, codegen};
///
/// let unit = codegen::generate(Framework::Sltbench, Shape::Fixture, "42").unwrap();
/// assert!(unit.contains("func_42"));
/// ```
pub fn generate(framework: Framework, shape: Shape, uid: &str) -> Result<String, CodegenError> {
    let generator: fn(&str) -> String = match (framework, shape) {
        (Framework::Sltbench, Shape::Simple) => sltbench_simple,
        (Framework::Sltbench, Shape::Args) => sltbench_args,
        (Framework::Sltbench, Shape::Fixture) => sltbench_fixture,
        (Framework::Sltbench, Shape::FixtureArgs) => sltbench_fixture_args,
        (Framework::Sltbench, Shape::Generator) => sltbench_generator,
        (Framework::Sltbench, Shape::LazyGenerator) => sltbench_lazy_generator,
        (Framework::Sltbench, Shape::FixtureGenerator) => sltbench_fixture_generator,
        (Framework::Sltbench, Shape::FixtureLazyGenerator) => sltbench_fixture_lazy_generator,
        (Framework::Sltbench, Shape::FixtureBuilder) => sltbench_fixture_builder,
        (Framework::Sltbench, Shape::FixtureBuilderArgs) => sltbench_fixture_builder_args,
        (Framework::Sltbench, Shape::FixtureBuilderGenerator) => {
            sltbench_fixture_builder_generator
        }
        (Framework::Sltbench, Shape::FixtureBuilderLazyGenerator) => {
            sltbench_fixture_builder_lazy_generator
        }
        (Framework::Googlebench, Shape::Simple) => googlebench_simple,
        (Framework::Googlebench, Shape::Fixture) => googlebench_fixture,
        (Framework::Nonius, Shape::Simple) => nonius_simple,
        _ => return Err(CodegenError::UnsupportedCombination { framework, shape }),
    };
    Ok(generator(uid))
}

/// sltbench unit: plain function.
pub fn sltbench_simple(uid: &str) -> String {
    render_uid(SLTBENCH_TMPL_SIMPLE, uid)
}

/// sltbench unit: static argument list.
pub fn sltbench_args(uid: &str) -> String {
    render_uid(SLTBENCH_TMPL_ARGS, uid)
}

/// sltbench unit: fixture with SetUp/TearDown lifecycle.
pub fn sltbench_fixture(uid: &str) -> String {
    render_uid(SLTBENCH_TMPL_FIXTURE, uid)
}

/// sltbench unit: fixture plus static argument list.
pub fn sltbench_fixture_args(uid: &str) -> String {
    render_uid(SLTBENCH_TMPL_FIXTURE_ARGS, uid)
}

/// sltbench unit: eager argument generator.
pub fn sltbench_generator(uid: &str) -> String {
    render_uid(SLTBENCH_TMPL_GENERATOR, uid)
}

/// sltbench unit: lazy argument generator with stop-exception exhaustion.
pub fn sltbench_lazy_generator(uid: &str) -> String {
    render_uid(SLTBENCH_TMPL_LAZY_GENERATOR, uid)
}

/// sltbench unit: fixture fed from an eager generator.
pub fn sltbench_fixture_generator(uid: &str) -> String {
    render_uid(SLTBENCH_TMPL_FIXTURE_GENERATOR, uid)
}

/// sltbench unit: fixture fed from a lazy generator.
pub fn sltbench_fixture_lazy_generator(uid: &str) -> String {
    render_uid(SLTBENCH_TMPL_FIXTURE_LAZY_GENERATOR, uid)
}

/// sltbench unit: fixture built by a free function.
pub fn sltbench_fixture_builder(uid: &str) -> String {
    render_uid(SLTBENCH_TMPL_FIXTURE_BUILDER, uid)
}

/// sltbench unit: fixture builder plus static argument list.
pub fn sltbench_fixture_builder_args(uid: &str) -> String {
    render_uid(SLTBENCH_TMPL_FIXTURE_BUILDER_ARGS, uid)
}

/// sltbench unit: fixture builder fed from an eager generator.
pub fn sltbench_fixture_builder_generator(uid: &str) -> String {
    render_uid(SLTBENCH_TMPL_FIXTURE_BUILDER_GENERATOR, uid)
}

/// sltbench unit: fixture builder fed from a lazy generator.
pub fn sltbench_fixture_builder_lazy_generator(uid: &str) -> String {
    render_uid(SLTBENCH_TMPL_FIXTURE_BUILDER_LAZY_GENERATOR, uid)
}

/// Google Benchmark unit: plain function with KeepRunning loop.
pub fn googlebench_simple(uid: &str) -> String {
    render_uid(GOOGLEBENCH_TMPL_SIMPLE, uid)
}

/// Google Benchmark unit: manual pause/resume fixture emulation.
pub fn googlebench_fixture(uid: &str) -> String {
    render_uid(GOOGLEBENCH_TMPL_FIXTURE, uid)
}

/// nonius unit: plain function registered through a lambda.
pub fn nonius_simple(uid: &str) -> String {
    render_uid(NONIUS_TMPL_SIMPLE, uid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_pairs() -> Vec<(Framework, Shape)> {
        let frameworks = [
            Framework::Sltbench,
            Framework::Googlebench,
            Framework::Nonius,
        ];
        frameworks
            .iter()
            .flat_map(|fw| fw.supported_shapes().iter().map(move |s| (*fw, *s)))
            .collect()
    }

    #[test]
    fn every_supported_pair_generates_a_unit() {
        for (fw, shape) in all_pairs() {
            let unit = generate(fw, shape, "7").unwrap();
            assert!(!unit.is_empty(), "{fw}/{shape} produced empty text");
            assert!(unit.contains('7'), "{fw}/{shape} lost the uid");
            assert!(
                !unit.contains("{{UID}}"),
                "{fw}/{shape} left an unreplaced placeholder"
            );
        }
    }

    #[test]
    fn unsupported_pairs_are_rejected() {
        let err = generate(Framework::Nonius, Shape::Fixture, "1").unwrap_err();
        assert!(matches!(
            err,
            CodegenError::UnsupportedCombination {
                framework: Framework::Nonius,
                shape: Shape::Fixture,
            }
        ));
        assert!(generate(Framework::Googlebench, Shape::LazyGenerator, "1").is_err());
        assert!(generate(Framework::Googlebench, Shape::FixtureBuilder, "1").is_err());
    }

    #[test]
    fn distinct_uids_produce_disjoint_symbols() {
        for (fw, shape) in all_pairs() {
            let a = generate(fw, shape, "aaa1").unwrap();
            let b = generate(fw, shape, "bbb2").unwrap();
            assert!(!a.contains("bbb2"), "{fw}/{shape}: uid leaked across units");
            assert!(!b.contains("aaa1"), "{fw}/{shape}: uid leaked across units");
        }
    }

    #[test]
    fn uid_lands_in_registration_macro() {
        let unit = sltbench_fixture_args("99");
        assert!(unit.contains("func_fixargs_99(Fixture::Type& fix, const Arg& arg)"));
        assert!(unit.contains("SLTBENCH_FUNCTION_WITH_FIXTURE_AND_ARGS(func_fixargs_99, Fixture, args);"));

        let unit = sltbench_fixture_builder_lazy_generator("5");
        assert!(unit.contains(
            "SLTBENCH_FUNCTION_WITH_FIXTURE_BUILDER_AND_LAZY_ARGS_GENERATOR(func_fb_lag_5, make_fixture, Generator);"
        ));
    }

    #[test]
    fn simple_units_stay_within_their_framework() {
        let slt = generate(Framework::Sltbench, Shape::Simple, "42").unwrap();
        let goog = generate(Framework::Googlebench, Shape::Simple, "42").unwrap();
        let non = generate(Framework::Nonius, Shape::Simple, "42").unwrap();

        assert_ne!(slt, goog);
        assert_ne!(goog, non);
        assert_ne!(slt, non);
        for unit in [&slt, &goog, &non] {
            assert!(unit.contains("simple_42"));
        }

        assert!(slt.contains("sltbench/Bench.h"));
        assert!(!slt.contains("benchmark/benchmark.h"));
        assert!(!slt.contains("nonius"));

        assert!(goog.contains("benchmark/benchmark.h"));
        assert!(!goog.contains("SLTBENCH"));
        assert!(!goog.contains("nonius"));

        assert!(non.contains("nonius/nonius.h++"));
        assert!(!non.contains("SLTBENCH"));
        assert!(!non.contains("benchmark/benchmark.h"));
    }

    #[test]
    fn helper_types_are_anonymous_namespaced() {
        // Units with helper types must be concatenatable; the uid-free
        // helpers (Arg, Fixture, Generator, make_fixture) rely on anonymous
        // namespaces for that.
        for shape in Shape::all() {
            if *shape == Shape::Simple {
                continue;
            }
            let unit = generate(Framework::Sltbench, *shape, "1").unwrap();
            assert!(
                unit.contains("namespace {"),
                "{shape} helpers are not namespace-scoped"
            );
        }
    }
}
