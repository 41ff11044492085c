//! # 命令行组装器
//!
//! 将每个程序的选项集合（未设置的选项不产生片段）按文档规定的顺序
//! 拼接为完整命令行字符串，产出不可变的 `CommandDescriptor`。
//!
//! 组装是纯函数式的：相同输入两次构建得到逐字节相同的命令串。
//! 输入文件不存在时只打印警告，不中断构建。
//!
//! ## 各程序的参数顺序
//! - obabel:      InputFile, OutputFile, 其余选项按声明顺序
//! - obminimize:  选项, InputFile, `> OutputFile`
//! - obconformer: NConf, Steps, InputFile, `> OutputFile`, ForceField
//! - obenergy:    选项, InputFile, `> OutputFile`（输出文件可省略）
//! - obgen:       选项, InputFile, `> OutputFile`
//!
//! ## 依赖关系
//! - 使用 `cmdline/args.rs` 的片段映射
//! - 使用 `utils/output.rs` 打印缺失文件警告
//! - 被 `commands/` 模块使用

use crate::cmdline::args::{
    CommandArg, ForceField, MinAlgorithm, ObabelArg, ObconformerArg, ObenergyArg, ObgenArg,
    ObminimizeArg,
};
use crate::utils::output;

use std::path::{Path, PathBuf};

/// 可执行程序名
pub const OBABEL: &str = "obabel";
pub const OBMINIMIZE: &str = "obminimize";
pub const OBCONFORMER: &str = "obconformer";
pub const OBENERGY: &str = "obenergy";
pub const OBGEN: &str = "obgen";

/// 进程输出前缀里使用的显示名
pub const DISPLAY_NAME: &str = "OpenBabel";

/// 一个已解析的选项：语义名 + 命令行片段
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedArg {
    pub name: &'static str,
    pub fragment: String,
}

/// 一次外部程序调用的完整描述，构建后不可变
#[derive(Debug, Clone)]
pub struct CommandDescriptor {
    /// 可执行程序名（如 `obabel`）
    pub program: &'static str,
    /// 显示名，用于进程输出前缀和失败提示
    pub display_name: &'static str,
    /// 按最终顺序排列的已解析选项
    pub args: Vec<ResolvedArg>,
    /// 完整命令行字符串
    pub command: String,
}

/// 按顺序收集非空片段的组装器
pub struct CommandBuilder {
    program: &'static str,
    display_name: &'static str,
    args: Vec<ResolvedArg>,
}

impl CommandBuilder {
    pub fn new(program: &'static str, display_name: &'static str) -> Self {
        CommandBuilder {
            program,
            display_name,
            args: Vec::new(),
        }
    }

    /// 追加一个选项；空片段（布尔假值）被跳过
    pub fn arg(&mut self, arg: &dyn CommandArg) {
        let fragment = arg.fragment();
        if !fragment.is_empty() {
            self.args.push(ResolvedArg {
                name: arg.name(),
                fragment,
            });
        }
    }

    /// 追加输入文件选项，文件不存在时打印警告但继续构建
    pub fn input_file(&mut self, arg: &dyn CommandArg, path: &Path) {
        if !path.is_file() {
            output::print_warning(&format!(
                "Invalid value passed to \"{}\" = \"{}\": file not found",
                arg.name(),
                path.display()
            ));
        }
        self.arg(arg);
    }

    pub fn build(self) -> CommandDescriptor {
        let mut command = String::from(self.program);
        for arg in &self.args {
            command.push(' ');
            command.push_str(&arg.fragment);
        }
        CommandDescriptor {
            program: self.program,
            display_name: self.display_name,
            args: self.args,
            command,
        }
    }
}

/// 以 `" && "` 连接两条命令，供 shell 顺序执行
pub fn chain_commands(first: &CommandDescriptor, second: &CommandDescriptor) -> String {
    format!("{} && {}", first.command, second.command)
}

// ─────────────────────────────────────────────────────────────
// obabel
// ─────────────────────────────────────────────────────────────

/// obabel 一次调用的选项集合
#[derive(Debug, Clone, Default)]
pub struct ObabelOptions {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub input_format: Option<String>,
    pub output_format: Option<String>,
    pub generate_2d: bool,
    pub generate_3d: bool,
    pub add_hydrogen: bool,
    pub delete_hydrogens: bool,
    pub add_props: Option<Vec<String>>,
    pub add_property: Option<(String, String)>,
    pub center: bool,
    pub charge_calc_method: Option<String>,
    pub combine_conformers: bool,
    pub convert_dative: bool,
    pub join_all_to_one_file: bool,
    pub ph: Option<f64>,
    pub rename_molecule: Option<String>,
    pub save_separate_conformers: bool,
    pub save_separate_files: bool,
    pub search_conformers: Option<String>,
    pub separate_fragments: bool,
    pub skip_conversion_error: bool,
}

impl ObabelOptions {
    /// Usage: `obabel [-i<input-type>] <infilename> [-o<output-type>] -O<outfilename> [Options]`
    pub fn descriptor(&self) -> CommandDescriptor {
        let mut b = CommandBuilder::new(OBABEL, DISPLAY_NAME);
        b.input_file(
            &ObabelArg::InputFile(self.input_file.clone()),
            &self.input_file,
        );
        b.arg(&ObabelArg::OutputFile(self.output_file.clone()));
        if let Some(fmt) = &self.input_format {
            b.arg(&ObabelArg::InputFormat(fmt.clone()));
        }
        if let Some(fmt) = &self.output_format {
            b.arg(&ObabelArg::OutputFormat(fmt.clone()));
        }
        b.arg(&ObabelArg::Generate2d(self.generate_2d));
        b.arg(&ObabelArg::Generate3d(self.generate_3d));
        b.arg(&ObabelArg::AddHydrogen(self.add_hydrogen));
        b.arg(&ObabelArg::DeleteHydrogens(self.delete_hydrogens));
        if let Some(props) = &self.add_props {
            b.arg(&ObabelArg::AddProps(props.clone()));
        }
        if let Some((name, value)) = &self.add_property {
            b.arg(&ObabelArg::AddProperty(name.clone(), value.clone()));
        }
        b.arg(&ObabelArg::Center(self.center));
        if let Some(method) = &self.charge_calc_method {
            b.arg(&ObabelArg::ChargeCalcMethod(method.clone()));
        }
        b.arg(&ObabelArg::CombineConformers(self.combine_conformers));
        b.arg(&ObabelArg::ConvertDative(self.convert_dative));
        b.arg(&ObabelArg::JoinAllToOneFile(self.join_all_to_one_file));
        if let Some(ph) = self.ph {
            b.arg(&ObabelArg::Ph(ph));
        }
        if let Some(title) = &self.rename_molecule {
            b.arg(&ObabelArg::RenameMolecule(title.clone()));
        }
        b.arg(&ObabelArg::SaveSeparateConformers(
            self.save_separate_conformers,
        ));
        b.arg(&ObabelArg::SaveSeparateFiles(self.save_separate_files));
        if let Some(options) = &self.search_conformers {
            b.arg(&ObabelArg::SearchConformers(options.clone()));
        }
        b.arg(&ObabelArg::SeparateFragments(self.separate_fragments));
        b.arg(&ObabelArg::SkipConversionError(self.skip_conversion_error));
        b.build()
    }
}

// ─────────────────────────────────────────────────────────────
// obminimize
// ─────────────────────────────────────────────────────────────

/// obminimize 一次调用的选项集合
#[derive(Debug, Clone)]
pub struct ObminimizeOptions {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub steps: u32,
    pub algorithm: Option<MinAlgorithm>,
    pub force_field: Option<ForceField>,
    pub output_format: Option<String>,
    pub add_hydrogen: bool,
}

impl ObminimizeOptions {
    /// Usage: `obminimize [options] <filename>`，输出经 shell 重定向
    pub fn descriptor(&self) -> CommandDescriptor {
        let mut b = CommandBuilder::new(OBMINIMIZE, DISPLAY_NAME);
        b.arg(&ObminimizeArg::Steps(self.steps));
        if let Some(alg) = self.algorithm {
            b.arg(&ObminimizeArg::Algorithm(alg));
        }
        if let Some(ff) = self.force_field {
            b.arg(&ObminimizeArg::ForceField(ff));
        }
        // obminimize 不像 obabel 那样自动识别输出格式，
        // 未指定时从输出文件扩展名推导
        let format = self.output_format.clone().or_else(|| {
            self.output_file
                .extension()
                .map(|ext| ext.to_string_lossy().to_string())
        });
        if let Some(fmt) = format {
            b.arg(&ObminimizeArg::OutputFormat(fmt));
        }
        b.arg(&ObminimizeArg::AddHydrogen(self.add_hydrogen));
        b.input_file(
            &ObminimizeArg::InputFile(self.input_file.clone()),
            &self.input_file,
        );
        b.arg(&ObminimizeArg::OutputFile(self.output_file.clone()));
        b.build()
    }
}

// ─────────────────────────────────────────────────────────────
// obconformer
// ─────────────────────────────────────────────────────────────

/// obconformer 一次调用的选项集合
#[derive(Debug, Clone)]
pub struct ObconformerOptions {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub num_conformers: Option<u32>,
    pub steps: Option<u32>,
    pub force_field: Option<ForceField>,
}

impl ObconformerOptions {
    /// Usage: `obconformer NSteps GeomSteps <file> [forcefield]`
    pub fn descriptor(&self) -> CommandDescriptor {
        let mut b = CommandBuilder::new(OBCONFORMER, DISPLAY_NAME);
        if let Some(n) = self.num_conformers {
            b.arg(&ObconformerArg::NumConformers(n));
        }
        if let Some(n) = self.steps {
            b.arg(&ObconformerArg::Steps(n));
        }
        b.input_file(
            &ObconformerArg::InputFile(self.input_file.clone()),
            &self.input_file,
        );
        b.arg(&ObconformerArg::OutputFile(self.output_file.clone()));
        if let Some(ff) = self.force_field {
            b.arg(&ObconformerArg::ForceField(ff));
        }
        b.build()
    }
}

// ─────────────────────────────────────────────────────────────
// obenergy
// ─────────────────────────────────────────────────────────────

/// obenergy 一次调用的选项集合
#[derive(Debug, Clone)]
pub struct ObenergyOptions {
    pub input_file: PathBuf,
    /// 省略时能量报告留在标准输出，由调用方从转录中提取
    pub output_file: Option<PathBuf>,
    pub force_field: Option<ForceField>,
    pub add_hydrogen: bool,
    pub verbose: bool,
}

impl ObenergyOptions {
    /// Usage: `obenergy [options] <filename>`，输出经 shell 重定向
    pub fn descriptor(&self) -> CommandDescriptor {
        let mut b = CommandBuilder::new(OBENERGY, DISPLAY_NAME);
        if let Some(ff) = self.force_field {
            b.arg(&ObenergyArg::ForceField(ff));
        }
        b.arg(&ObenergyArg::AddHydrogen(self.add_hydrogen));
        b.arg(&ObenergyArg::Verbose(self.verbose));
        b.input_file(
            &ObenergyArg::InputFile(self.input_file.clone()),
            &self.input_file,
        );
        if let Some(out) = &self.output_file {
            b.arg(&ObenergyArg::OutputFile(out.clone()));
        }
        b.build()
    }
}

// ─────────────────────────────────────────────────────────────
// obgen
// ─────────────────────────────────────────────────────────────

/// obgen 一次调用的选项集合
#[derive(Debug, Clone)]
pub struct ObgenOptions {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub force_field: Option<ForceField>,
}

impl ObgenOptions {
    /// Usage: `obgen <filename> [options]`，固定输出 SDF，经 shell 重定向
    pub fn descriptor(&self) -> CommandDescriptor {
        let mut b = CommandBuilder::new(OBGEN, DISPLAY_NAME);
        if let Some(ff) = self.force_field {
            b.arg(&ObgenArg::ForceField(ff));
        }
        b.input_file(
            &ObgenArg::InputFile(self.input_file.clone()),
            &self.input_file,
        );
        b.arg(&ObgenArg::OutputFile(self.output_file.clone()));
        b.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obabel_minimal_command() {
        let opts = ObabelOptions {
            input_file: PathBuf::from("a.sdf"),
            output_file: PathBuf::from("a.pdb"),
            ..Default::default()
        };
        let desc = opts.descriptor();
        assert_eq!(desc.command, "obabel \"a.sdf\" -O \"a.pdb\"");
        assert_eq!(desc.program, "obabel");
        assert_eq!(desc.args.len(), 2);
    }

    #[test]
    fn test_obabel_option_positions() {
        let opts = ObabelOptions {
            input_file: PathBuf::from("mol.smi"),
            output_file: PathBuf::from("mol.sdf"),
            input_format: Some("smi".into()),
            generate_3d: true,
            ph: Some(7.4),
            ..Default::default()
        };
        let desc = opts.descriptor();
        assert_eq!(
            desc.command,
            "obabel \"mol.smi\" -O \"mol.sdf\" -i smi --gen3d -p 7.4"
        );
    }

    #[test]
    fn test_omitted_option_leaves_no_fragment() {
        let opts = ObabelOptions {
            input_file: PathBuf::from("a.sdf"),
            output_file: PathBuf::from("a.pdb"),
            generate_3d: false,
            ..Default::default()
        };
        let desc = opts.descriptor();
        assert!(!desc.command.contains("--gen3d"));
        assert!(desc.args.iter().all(|a| a.name != "Generate3D"));
    }

    #[test]
    fn test_build_is_deterministic() {
        let opts = ObabelOptions {
            input_file: PathBuf::from("x.mol2"),
            output_file: PathBuf::from("x.xyz"),
            add_hydrogen: true,
            center: true,
            rename_molecule: Some("benzene".into()),
            ..Default::default()
        };
        assert_eq!(opts.descriptor().command, opts.descriptor().command);
    }

    #[test]
    fn test_missing_input_file_still_builds() {
        let opts = ObabelOptions {
            input_file: PathBuf::from("definitely/not/here.sdf"),
            output_file: PathBuf::from("out.pdb"),
            ..Default::default()
        };
        // 只打印警告，命令串照常产出
        let desc = opts.descriptor();
        assert_eq!(
            desc.command,
            "obabel \"definitely/not/here.sdf\" -O \"out.pdb\""
        );
    }

    #[test]
    fn test_obminimize_order_and_redirect() {
        let opts = ObminimizeOptions {
            input_file: PathBuf::from("in.sdf"),
            output_file: PathBuf::from("out.pdb"),
            steps: 2500,
            algorithm: Some(MinAlgorithm::Sd),
            force_field: Some(ForceField::Mmff94),
            output_format: None,
            add_hydrogen: true,
        };
        let desc = opts.descriptor();
        assert_eq!(
            desc.command,
            "obminimize -n 2500 -sd -ff MMFF94 -o pdb -h \"in.sdf\" > \"out.pdb\""
        );
    }

    #[test]
    fn test_obminimize_explicit_format_wins() {
        let opts = ObminimizeOptions {
            input_file: PathBuf::from("in.sdf"),
            output_file: PathBuf::from("out.dat"),
            steps: 100,
            algorithm: None,
            force_field: None,
            output_format: Some("pdb".into()),
            add_hydrogen: false,
        };
        assert!(opts.descriptor().command.contains("-o pdb"));
    }

    #[test]
    fn test_obconformer_trailing_force_field() {
        let opts = ObconformerOptions {
            input_file: PathBuf::from("in.sdf"),
            output_file: PathBuf::from("confs.sdf"),
            num_conformers: Some(30),
            steps: Some(500),
            force_field: Some(ForceField::Uff),
        };
        let desc = opts.descriptor();
        assert_eq!(
            desc.command,
            "obconformer 30 500 \"in.sdf\" > \"confs.sdf\" UFF"
        );
    }

    #[test]
    fn test_obenergy_without_output_file() {
        let opts = ObenergyOptions {
            input_file: PathBuf::from("mol.sdf"),
            output_file: None,
            force_field: Some(ForceField::Gaff),
            add_hydrogen: false,
            verbose: false,
        };
        let desc = opts.descriptor();
        assert_eq!(desc.command, "obenergy -ff GAFF \"mol.sdf\"");
        assert!(!desc.command.contains('>'));
    }

    #[test]
    fn test_chain_commands() {
        let gen = ObgenOptions {
            input_file: PathBuf::from("mol.smi"),
            output_file: PathBuf::from("/tmp/obgen-1.sdf"),
            force_field: None,
        }
        .descriptor();
        let conv = ObabelOptions {
            input_file: PathBuf::from("/tmp/obgen-1.sdf"),
            output_file: PathBuf::from("mol.pdb"),
            input_format: Some("sdf".into()),
            ..Default::default()
        }
        .descriptor();
        let chained = chain_commands(&gen, &conv);
        assert_eq!(
            chained,
            "obgen \"mol.smi\" > \"/tmp/obgen-1.sdf\" && \
             obabel \"/tmp/obgen-1.sdf\" -O \"mol.pdb\" -i sdf"
        );
    }
}
