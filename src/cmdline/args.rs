//! # 参数片段映射表
//!
//! 将语义化选项映射为各 Open Babel 可执行程序的命令行片段。
//! 每个程序一个 tagged-variant 枚举，`fragment()` 返回精确的命令行
//! 片段；布尔选项为假时返回空串表示"省略"。
//!
//! 片段内容与 Open Babel 文档一一对应，例如 obabel 的 `-O <file>`、
//! `--gen3d`、`-p <pH>`；obminimize/obconformer/obenergy/obgen 没有
//! 输出文件选项，统一通过 shell 重定向 `> "file"` 落盘。
//!
//! ## 依赖关系
//! - 被 `cmdline/builder.rs` 使用
//! - 无外部模块依赖

use clap::ValueEnum;
use std::path::{Path, PathBuf};

/// 统一的参数片段接口，`CommandBuilder` 藉此收集五个程序的参数
pub trait CommandArg {
    /// 语义化选项名（用于诊断输出和参数表格）
    fn name(&self) -> &'static str;

    /// 精确的命令行片段，空串表示省略该选项
    fn fragment(&self) -> String;
}

/// 布尔选项：条件成立时返回片段，否则省略
fn flag(condition: bool, fragment: &str) -> String {
    if condition {
        fragment.to_string()
    } else {
        String::new()
    }
}

/// 路径统一用双引号包裹，容许路径中出现空格
fn quote(path: &Path) -> String {
    format!("\"{}\"", path.display())
}

// ─────────────────────────────────────────────────────────────
// 公共值类型
// ─────────────────────────────────────────────────────────────

/// Open Babel 支持的力场
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ForceField {
    /// General Amber Force Field
    Gaff,
    /// Ghemical force field
    Ghemical,
    /// MMFF94 force field
    Mmff94,
    /// MMFF94s force field
    Mmff94s,
    /// Universal Force Field
    Uff,
}

impl std::fmt::Display for ForceField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForceField::Gaff => write!(f, "GAFF"),
            ForceField::Ghemical => write!(f, "Ghemical"),
            ForceField::Mmff94 => write!(f, "MMFF94"),
            ForceField::Mmff94s => write!(f, "MMFF94s"),
            ForceField::Uff => write!(f, "UFF"),
        }
    }
}

/// obminimize 的最小化算法
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum MinAlgorithm {
    /// Steepest descent
    Sd,
    /// Conjugate gradients
    Cg,
}

impl std::fmt::Display for MinAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MinAlgorithm::Sd => write!(f, "sd"),
            MinAlgorithm::Cg => write!(f, "cg"),
        }
    }
}

// ─────────────────────────────────────────────────────────────
// obabel
// ─────────────────────────────────────────────────────────────

/// obabel 支持的选项
#[derive(Debug, Clone, PartialEq)]
pub enum ObabelArg {
    /// 输入分子文件路径
    InputFile(PathBuf),
    /// `-O` 输出文件路径
    OutputFile(PathBuf),
    /// `-i` 输入格式（缺省时由 obabel 按扩展名自动识别）
    InputFormat(String),
    /// `-o` 输出格式
    OutputFormat(String),
    /// `--gen2d` 生成 2D 坐标
    Generate2d(bool),
    /// `--gen3d` 生成 3D 坐标
    Generate3d(bool),
    /// `-h` 显式加氢
    AddHydrogen(bool),
    /// `-d` 删除氢（改为隐式）
    DeleteHydrogens(bool),
    /// `--add` 按描述符列表添加属性
    AddProps(Vec<String>),
    /// `--property` 添加或替换单个属性
    AddProperty(String, String),
    /// `-c` 将原子坐标中心移到 (0,0,0)
    Center(bool),
    /// `--partialcharge` 指定部分电荷计算方法
    ChargeCalcMethod(String),
    /// `--readconformers` 将相邻构象合并为单分子
    CombineConformers(bool),
    /// `-b` 转换配位键
    ConvertDative(bool),
    /// `-j` 将全部输入分子合并为单条输出
    JoinAllToOneFile(bool),
    /// `-p` 按 pH 值加氢
    Ph(f64),
    /// `--title` 添加或替换分子标题
    RenameMolecule(String),
    /// `--writeconformers` 将多构象分别输出
    SaveSeparateConformers(bool),
    /// `-m` 拆分为多个输出文件
    SaveSeparateFiles(bool),
    /// `--conformer` 构象搜索选项
    SearchConformers(String),
    /// `--separate` 拆分非连通片段
    SeparateFragments(bool),
    /// `-e` 转换出错后继续
    SkipConversionError(bool),
}

impl CommandArg for ObabelArg {
    fn name(&self) -> &'static str {
        match self {
            ObabelArg::InputFile(_) => "InputFile",
            ObabelArg::OutputFile(_) => "OutputFile",
            ObabelArg::InputFormat(_) => "InputFormat",
            ObabelArg::OutputFormat(_) => "OutputFormat",
            ObabelArg::Generate2d(_) => "Generate2D",
            ObabelArg::Generate3d(_) => "Generate3D",
            ObabelArg::AddHydrogen(_) => "AddHydrogen",
            ObabelArg::DeleteHydrogens(_) => "DeleteHydrogens",
            ObabelArg::AddProps(_) => "AddProps",
            ObabelArg::AddProperty(_, _) => "AddProperty",
            ObabelArg::Center(_) => "Center",
            ObabelArg::ChargeCalcMethod(_) => "ChargeCalcMethod",
            ObabelArg::CombineConformers(_) => "CombineConformers",
            ObabelArg::ConvertDative(_) => "ConvertDative",
            ObabelArg::JoinAllToOneFile(_) => "JoinAllToOneFile",
            ObabelArg::Ph(_) => "pH",
            ObabelArg::RenameMolecule(_) => "RenameMolecule",
            ObabelArg::SaveSeparateConformers(_) => "SaveSeparateConformers",
            ObabelArg::SaveSeparateFiles(_) => "SaveSeparateFiles",
            ObabelArg::SearchConformers(_) => "SearchConformers",
            ObabelArg::SeparateFragments(_) => "SeparateFragments",
            ObabelArg::SkipConversionError(_) => "SkipConversionError",
        }
    }

    fn fragment(&self) -> String {
        match self {
            ObabelArg::InputFile(path) => quote(path),
            ObabelArg::OutputFile(path) => format!("-O {}", quote(path)),
            ObabelArg::InputFormat(fmt) => format!("-i {}", fmt),
            ObabelArg::OutputFormat(fmt) => format!("-o {}", fmt),
            ObabelArg::Generate2d(c) => flag(*c, "--gen2d"),
            ObabelArg::Generate3d(c) => flag(*c, "--gen3d"),
            ObabelArg::AddHydrogen(c) => flag(*c, "-h"),
            ObabelArg::DeleteHydrogens(c) => flag(*c, "-d"),
            ObabelArg::AddProps(props) => format!("--add {}", props.join(" ")),
            ObabelArg::AddProperty(name, value) => format!("--property {} {}", name, value),
            ObabelArg::Center(c) => flag(*c, "-c"),
            ObabelArg::ChargeCalcMethod(method) => format!("--partialcharge {}", method),
            ObabelArg::CombineConformers(c) => flag(*c, "--readconformers"),
            ObabelArg::ConvertDative(c) => flag(*c, "-b"),
            ObabelArg::JoinAllToOneFile(c) => flag(*c, "-j"),
            ObabelArg::Ph(ph) => format!("-p {}", ph),
            ObabelArg::RenameMolecule(title) => format!("--title \"{}\"", title),
            ObabelArg::SaveSeparateConformers(c) => flag(*c, "--writeconformers"),
            ObabelArg::SaveSeparateFiles(c) => flag(*c, "-m"),
            ObabelArg::SearchConformers(options) => format!("--conformer {}", options),
            ObabelArg::SeparateFragments(c) => flag(*c, "--separate"),
            ObabelArg::SkipConversionError(c) => flag(*c, "-e"),
        }
    }
}

// ─────────────────────────────────────────────────────────────
// obminimize
// ─────────────────────────────────────────────────────────────

/// obminimize 支持的选项
#[derive(Debug, Clone, PartialEq)]
pub enum ObminimizeArg {
    /// `-n` 最小化步数
    Steps(u32),
    /// `-ff` 力场
    ForceField(ForceField),
    /// `-sd` / `-cg` 最小化算法
    Algorithm(MinAlgorithm),
    /// `-h` 显式加氢
    AddHydrogen(bool),
    /// `-o` 输出格式（obminimize 不会自动按扩展名识别）
    OutputFormat(String),
    /// 输入分子文件路径
    InputFile(PathBuf),
    /// 输出文件，经 shell 重定向写入
    OutputFile(PathBuf),
}

impl CommandArg for ObminimizeArg {
    fn name(&self) -> &'static str {
        match self {
            ObminimizeArg::Steps(_) => "MinimizationSteps",
            ObminimizeArg::ForceField(_) => "ForceField",
            ObminimizeArg::Algorithm(_) => "MinimizationAlgorithm",
            ObminimizeArg::AddHydrogen(_) => "AddHydrogen",
            ObminimizeArg::OutputFormat(_) => "OutputFormat",
            ObminimizeArg::InputFile(_) => "InputFile",
            ObminimizeArg::OutputFile(_) => "OutputFile",
        }
    }

    fn fragment(&self) -> String {
        match self {
            ObminimizeArg::Steps(n) => format!("-n {}", n),
            ObminimizeArg::ForceField(ff) => format!("-ff {}", ff),
            ObminimizeArg::Algorithm(alg) => format!("-{}", alg),
            ObminimizeArg::AddHydrogen(c) => flag(*c, "-h"),
            ObminimizeArg::OutputFormat(fmt) => format!("-o {}", fmt),
            ObminimizeArg::InputFile(path) => quote(path),
            ObminimizeArg::OutputFile(path) => format!("> {}", quote(path)),
        }
    }
}

// ─────────────────────────────────────────────────────────────
// obconformer
// ─────────────────────────────────────────────────────────────

/// obconformer 支持的选项
///
/// 用法为 `obconformer NSteps GeomSteps <file> [forcefield]`，
/// 前两个参数是裸位置参数，力场跟在重定向之后。
#[derive(Debug, Clone, PartialEq)]
pub enum ObconformerArg {
    /// 生成的构象数量（裸位置参数）
    NumConformers(u32),
    /// 几何优化步数（裸位置参数）
    Steps(u32),
    /// 输入分子文件路径
    InputFile(PathBuf),
    /// 输出文件，经 shell 重定向写入
    OutputFile(PathBuf),
    /// 力场名（裸位置参数，置于末尾）
    ForceField(ForceField),
}

impl CommandArg for ObconformerArg {
    fn name(&self) -> &'static str {
        match self {
            ObconformerArg::NumConformers(_) => "NumberOfConformers",
            ObconformerArg::Steps(_) => "MinimizationSteps",
            ObconformerArg::InputFile(_) => "InputFile",
            ObconformerArg::OutputFile(_) => "OutputFile",
            ObconformerArg::ForceField(_) => "ForceField",
        }
    }

    fn fragment(&self) -> String {
        match self {
            ObconformerArg::NumConformers(n) => format!("{}", n),
            ObconformerArg::Steps(n) => format!("{}", n),
            ObconformerArg::InputFile(path) => quote(path),
            ObconformerArg::OutputFile(path) => format!("> {}", quote(path)),
            ObconformerArg::ForceField(ff) => format!("{}", ff),
        }
    }
}

// ─────────────────────────────────────────────────────────────
// obenergy
// ─────────────────────────────────────────────────────────────

/// obenergy 支持的选项
#[derive(Debug, Clone, PartialEq)]
pub enum ObenergyArg {
    /// `-h` 显式加氢
    AddHydrogen(bool),
    /// `-ff` 力场
    ForceField(ForceField),
    /// `-v` 输出每一项能量分量
    Verbose(bool),
    /// 输入分子文件路径
    InputFile(PathBuf),
    /// 输出文件，经 shell 重定向写入
    OutputFile(PathBuf),
}

impl CommandArg for ObenergyArg {
    fn name(&self) -> &'static str {
        match self {
            ObenergyArg::AddHydrogen(_) => "AddHydrogen",
            ObenergyArg::ForceField(_) => "ForceField",
            ObenergyArg::Verbose(_) => "Verbose",
            ObenergyArg::InputFile(_) => "InputFile",
            ObenergyArg::OutputFile(_) => "OutputFile",
        }
    }

    fn fragment(&self) -> String {
        match self {
            ObenergyArg::AddHydrogen(c) => flag(*c, "-h"),
            ObenergyArg::ForceField(ff) => format!("-ff {}", ff),
            ObenergyArg::Verbose(c) => flag(*c, "-v"),
            ObenergyArg::InputFile(path) => quote(path),
            ObenergyArg::OutputFile(path) => format!("> {}", quote(path)),
        }
    }
}

// ─────────────────────────────────────────────────────────────
// obgen
// ─────────────────────────────────────────────────────────────

/// obgen 支持的选项
#[derive(Debug, Clone, PartialEq)]
pub enum ObgenArg {
    /// `-ff` 力场
    ForceField(ForceField),
    /// 输入分子文件路径
    InputFile(PathBuf),
    /// 输出文件，经 shell 重定向写入（obgen 固定输出 SDF）
    OutputFile(PathBuf),
}

impl CommandArg for ObgenArg {
    fn name(&self) -> &'static str {
        match self {
            ObgenArg::ForceField(_) => "ForceField",
            ObgenArg::InputFile(_) => "InputFile",
            ObgenArg::OutputFile(_) => "OutputFile",
        }
    }

    fn fragment(&self) -> String {
        match self {
            ObgenArg::ForceField(ff) => format!("-ff {}", ff),
            ObgenArg::InputFile(path) => quote(path),
            ObgenArg::OutputFile(path) => format!("> {}", quote(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obabel_fragments() {
        assert_eq!(
            ObabelArg::InputFile(PathBuf::from("a.sdf")).fragment(),
            "\"a.sdf\""
        );
        assert_eq!(
            ObabelArg::OutputFile(PathBuf::from("a.pdb")).fragment(),
            "-O \"a.pdb\""
        );
        assert_eq!(ObabelArg::InputFormat("smi".into()).fragment(), "-i smi");
        assert_eq!(ObabelArg::Ph(7.4).fragment(), "-p 7.4");
        assert_eq!(
            ObabelArg::RenameMolecule("aspirin".into()).fragment(),
            "--title \"aspirin\""
        );
        assert_eq!(
            ObabelArg::AddProps(vec!["MW".into(), "logP".into()]).fragment(),
            "--add MW logP"
        );
        assert_eq!(
            ObabelArg::AddProperty("source".into(), "chembl".into()).fragment(),
            "--property source chembl"
        );
    }

    #[test]
    fn test_boolean_false_is_omitted() {
        assert_eq!(ObabelArg::Generate3d(false).fragment(), "");
        assert_eq!(ObabelArg::AddHydrogen(false).fragment(), "");
        assert_eq!(ObminimizeArg::AddHydrogen(false).fragment(), "");
        assert_eq!(ObenergyArg::Verbose(false).fragment(), "");
    }

    #[test]
    fn test_boolean_true_gives_flag() {
        assert_eq!(ObabelArg::Generate3d(true).fragment(), "--gen3d");
        assert_eq!(ObabelArg::Center(true).fragment(), "-c");
        assert_eq!(ObabelArg::SkipConversionError(true).fragment(), "-e");
        assert_eq!(ObenergyArg::Verbose(true).fragment(), "-v");
    }

    #[test]
    fn test_minimize_fragments() {
        assert_eq!(ObminimizeArg::Steps(2500).fragment(), "-n 2500");
        assert_eq!(
            ObminimizeArg::ForceField(ForceField::Mmff94).fragment(),
            "-ff MMFF94"
        );
        assert_eq!(
            ObminimizeArg::Algorithm(MinAlgorithm::Cg).fragment(),
            "-cg"
        );
        assert_eq!(
            ObminimizeArg::OutputFile(PathBuf::from("out.pdb")).fragment(),
            "> \"out.pdb\""
        );
    }

    #[test]
    fn test_conformer_bare_positionals() {
        assert_eq!(ObconformerArg::NumConformers(30).fragment(), "30");
        assert_eq!(ObconformerArg::Steps(500).fragment(), "500");
        assert_eq!(
            ObconformerArg::ForceField(ForceField::Uff).fragment(),
            "UFF"
        );
    }
}
