// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Docket contributors

//! Built-in document-type signature table
//!
//! Ontario family-court forms plus the correspondence and evidence
//! categories a self-represented case file accumulates. Declaration
//! order matters: it breaks confidence ties during ranking.

use super::Signature;

fn sig(name: &str, patterns: &[&str], keywords: &[&str], priority: u8) -> Signature {
    Signature {
        name: name.to_string(),
        patterns: patterns.iter().map(|s| s.to_string()).collect(),
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
        priority,
    }
}

/// The default signature table
pub fn builtin() -> Vec<Signature> {
    vec![
        sig(
            "Form_14A_Affidavit",
            &["FORM 14A", "AFFIDAVIT.*GENERAL", "MAKE OATH AND SAY"],
            &["affidavit", "sworn", "affirmed", "oath"],
            9,
        ),
        sig(
            "Form_14_Application",
            &["FORM 14", "APPLICATION.*GENERAL", "COURT CASE HAS BEEN STARTED"],
            &["application", "court case", "respondent"],
            10,
        ),
        sig(
            "Form_14B_Motion",
            &["FORM 14B", "MOTION", "WILL MAKE A MOTION"],
            &["motion", "grounds", "relief sought"],
            9,
        ),
        sig(
            "Form_8_Financial",
            &["FORM 8", "FINANCIAL STATEMENT", "INCOME", "EXPENSES"],
            &["income", "expenses", "assets", "debts"],
            8,
        ),
        sig(
            "Form_35_1_Support",
            &["FORM 35.1", "AFFIDAVIT.*SUPPORT.*CLAIM", "CUSTODY OR ACCESS"],
            &["custody", "access", "best interests"],
            9,
        ),
        sig(
            "Form_6B_Record",
            &["FORM 6B", "CONTINUING RECORD", "TABLE OF CONTENTS"],
            &["continuing record", "table of contents", "tab"],
            7,
        ),
        sig(
            "Emergency_Motion_Request",
            &["EMERGENCY MOTION", "URGENT", "IMMEDIATE RELIEF"],
            &["emergency", "urgent", "immediate", "risk"],
            10,
        ),
        sig(
            "Supreme_Court_Application",
            &["SUPREME COURT", "LEAVE TO APPEAL", "COURT OF APPEAL"],
            &["supreme court", "leave", "appeal", "national importance"],
            8,
        ),
        sig(
            "FACS_Complaint",
            &["FAMILY.*CHILDREN.*SERVICES", "FACS", "COMPLAINT.*CONCERN"],
            &["family services", "children services", "complaint"],
            7,
        ),
        sig(
            "Police_Report_Ontario",
            &["ONTARIO POLICE", "INCIDENT REPORT", "OCCURRENCE"],
            &["police", "incident", "report", "occurrence"],
            8,
        ),
        sig(
            "Police_Complaint_Niagara",
            &["NIAGARA.*POLICE", "PUBLIC COMPLAINT", "PROFESSIONAL STANDARDS"],
            &["niagara police", "complaint", "professional standards"],
            8,
        ),
        sig(
            "Police_Report_Peel",
            &["PEEL.*POLICE", "OCCURRENCE REPORT", "COMPLAINANT"],
            &["peel police", "occurrence", "complainant"],
            8,
        ),
        sig(
            "ESA_Documentation",
            &["EMOTIONAL SUPPORT", "ESA", "ACCOMMODATION"],
            &["emotional support", "ESA", "accommodation", "disability"],
            9,
        ),
        sig(
            "HR_Correspondence",
            &["HUMAN RESOURCES", "HR", "ACCOMMODATION REQUEST"],
            &["human resources", "HR", "accommodation", "workplace"],
            8,
        ),
        sig(
            "Medical_Records",
            &["MEDICAL", "DOCTOR", "PHYSICIAN", "DIAGNOSIS"],
            &["medical", "doctor", "physician", "diagnosis", "treatment"],
            7,
        ),
        sig(
            "Legal_Correspondence",
            &["LEGAL", "LAWYER", "COUNSEL", "SOLICITOR"],
            &["legal", "lawyer", "counsel", "solicitor", "attorney"],
            8,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::SignatureSet;

    #[test]
    fn builtin_table_compiles() {
        let set = SignatureSet::builtin().unwrap();
        assert_eq!(set.len(), 16);
    }

    #[test]
    fn priorities_in_range() {
        for sig in builtin() {
            assert!((1..=10).contains(&sig.priority), "{}", sig.name);
        }
    }

    #[test]
    fn names_are_unique() {
        let table = builtin();
        let mut names: Vec<_> = table.iter().map(|s| s.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), table.len());
    }

    #[test]
    fn affidavit_form_recognized() {
        let set = SignatureSet::builtin().unwrap();
        let text = "FORM 14A: AFFIDAVIT (GENERAL)\nI MAKE OATH AND SAY as follows";
        let results = set.classify(text, "form_14a.txt");
        assert_eq!(results[0].document_type, "Form_14A_Affidavit");
    }

    #[test]
    fn emergency_motion_outranks_plain_motion() {
        let set = SignatureSet::builtin().unwrap();
        let text = "EMERGENCY MOTION\nURGENT: the applicant seeks IMMEDIATE RELIEF\n\
                    there is a serious risk to the child";
        let results = set.classify(text, "emergency.txt");
        assert_eq!(results[0].document_type, "Emergency_Motion_Request");
    }
}
