//! Built-in migration for the mortgage simulator's "plusvalía real" input.
//!
//! Bumps the default real appreciation from 0 % to 1 % and wraps the field
//! label in a row with a `?` button that reveals an explanatory tooltip.

use crate::domain::model::{PatchSet, Replacement};

pub const DEFAULT_TARGET: &str = "src/App.jsx";

pub const SUCCESS_MESSAGE: &str =
    "\u{2713} Successfully updated plusvalía real with tooltip and default value";
pub const FAILURE_MESSAGE: &str = "\u{2717} Could not find the section to replace";

pub const DEFAULT_VALUE_BEFORE: &str =
    "const [plusvaliaRealPct, setPlusvaliaRealPct] = useState(0);";
pub const DEFAULT_VALUE_AFTER: &str =
    "const [plusvaliaRealPct, setPlusvaliaRealPct] = useState(1);";

pub const LABEL_BLOCK_BEFORE: &str = r#"            <label htmlFor="plusvaliaRealPct" className="text-sm text-gray-700">Plusvalía real (% adicional)</label>
            <input id="plusvaliaRealPct" type="number" step={0.1} value={plusvaliaRealPct} onChange={e=>setPlusvaliaRealPct(Number(e.target.value))} className="border-2 border-gray-300 rounded-lg px-4 py-2.5 w-full text-base font-medium focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent transition-all hover:border-gray-400 bg-gray-50"/>"#;

pub const LABEL_BLOCK_AFTER: &str = r#"            <div className="flex items-center gap-2">
              <label htmlFor="plusvaliaRealPct" className="text-sm text-gray-700">Plusvalía real (% adicional)</label>
              <div className="relative group">
                <button
                  type="button"
                  aria-label="Ayuda: plusvalía real"
                  className="w-5 h-5 rounded-full border border-gray-300 text-gray-600 text-xs font-semibold leading-none flex items-center justify-center bg-gray-50 hover:border-gray-400 focus:outline-none focus:ring-2 focus:ring-blue-500"
                >
                  ?
                </button>
                <div className="hidden group-hover:block group-focus-within:block absolute z-10 left-0 top-full mt-2 w-80 bg-white border border-gray-200 rounded-lg shadow px-3 py-2 text-xs text-gray-700">
                  <div className="font-semibold text-gray-900 mb-1">¿Qué es Plusvalía Real?</div>
                  <div>Es el crecimiento del valor del inmueble <b>por encima de la inflación</b>. Representa la apreciación real del activo a lo largo del tiempo.</div>
                  <div className="mt-1">El valor actual viene prerellenado con <b>1%</b>, que es una estimación realista y pesimista para el mercado inmobiliario mexicano (asume crecimiento moderado).</div>
                  <div className="mt-1 text-gray-600">Si no estás seguro de este valor, no lo modifiques; el simulador funcionará bien con esta estimación por defecto.</div>
                </div>
              </div>
            </div>
            <input id="plusvaliaRealPct" type="number" step={0.1} value={plusvaliaRealPct} onChange={e=>setPlusvaliaRealPct(Number(e.target.value))} className="border-2 border-gray-300 rounded-lg px-4 py-2.5 w-full text-base font-medium focus:outline-none focus:ring-2 focus:ring-blue-500 focus:border-transparent transition-all hover:border-gray-400 bg-gray-50"/>"#;

pub fn builtin_patch_set(target: &str) -> PatchSet {
    PatchSet {
        name: "plusvalia-tooltip".to_string(),
        description: "Default plusvalía real to 1% and add a help tooltip to its label".to_string(),
        target: target.to_string(),
        success_message: SUCCESS_MESSAGE.to_string(),
        failure_message: FAILURE_MESSAGE.to_string(),
        replacements: vec![
            Replacement::optional("default-value", DEFAULT_VALUE_BEFORE, DEFAULT_VALUE_AFTER),
            Replacement::gated("label-tooltip", LABEL_BLOCK_BEFORE, LABEL_BLOCK_AFTER),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_order_and_gating() {
        let set = builtin_patch_set(DEFAULT_TARGET);
        assert_eq!(set.target, "src/App.jsx");
        assert_eq!(set.replacements.len(), 2);
        assert!(!set.replacements[0].required);
        assert!(set.replacements[1].required);
    }

    #[test]
    fn test_tooltip_block_keeps_input_line() {
        let input_line = LABEL_BLOCK_BEFORE.lines().nth(1).unwrap();
        assert!(LABEL_BLOCK_AFTER.ends_with(input_line));
        assert!(LABEL_BLOCK_AFTER.contains("aria-label=\"Ayuda: plusvalía real\""));
        assert!(LABEL_BLOCK_AFTER.contains("¿Qué es Plusvalía Real?"));
    }

    #[test]
    fn test_tooltip_block_does_not_contain_gate_text() {
        // a second run must fail the gate
        assert!(!LABEL_BLOCK_AFTER.contains(LABEL_BLOCK_BEFORE));
    }
}
