//! The manual publishing runbook printed after a successful run.
//!
//! Everything past this point needs credentials or a human decision, so the
//! tool stops here and hands the operator a numbered checklist.

/// Print the remaining manual publishing steps.
pub fn print() {
    println!("====Next Steps====");
    println!("1. Gain upload right to Maven Central repo.");
    println!("1-1. Sign up for a JIRA account at Sonatype: ");
    println!(
        "1-2. File a JIRA ticket: \
         https://issues.sonatype.org/secure/CreateIssue.jspa?issuetype=21&pid=10134. Example: \
         https://issues.sonatype.org/browse/OSSRH-67724"
    );
    println!(
        "2. Store the Sonatype credentials in .m2/settings.xml. See instructions in \
         https://central.sonatype.org/publish/publish-maven/"
    );
    println!(
        "3. Now on a Linux machine, run the following to build Scala 2.12 artifacts. \
         Make sure to use an Internet connection with fast upload speed:"
    );
    println!(
        "   # Skip native build, since we have all needed native binaries from CI\n\
         \x20  GPG_TTY=$(tty) mvn deploy -Prelease -DskipTests -Dskip.native.build=true"
    );
    println!(
        "4. Log into https://oss.sonatype.org/. On the left menu panel, click Staging \
         Repositories. Visit the URL https://oss.sonatype.org/content/repositories/mldmlc-xxxx \
         to inspect the staged JAR files. Finally, press Release button to publish the \
         artifacts to the Maven Central repository. The top-level metapackage should be \
         named xgboost-jvm_2.12."
    );
    println!(
        "5. Remove the Scala 2.12 artifacts and build Scala 2.13 artifacts:\n\
         \x20  python ops/script/change_scala_version.py --scala-version 2.13 --purge-artifacts\n\
         \x20  GPG_TTY=$(tty) mvn deploy -Prelease -DskipTests -Dskip.native.build=true"
    );
    println!(
        "6. Go to https://oss.sonatype.org/ to release the Scala 2.13 artifacts. \
         The top-level metapackage should be named xgboost-jvm_2.13."
    );
}
